//! Handlers for the `/memo` resource.

use atsukai_core::types::DbId;
use atsukai_core::validation::validate_input;
use atsukai_db::models::memo::{CreateMemo, MemoFilter, MemoLookup, UpdateMemo};
use atsukai_db::repositories::MemoRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use super::not_found;
use crate::error::AppResult;
use crate::extract::{JsonBody, PathParam, QueryParams};
use crate::state::AppState;

const ENTITY: &str = "Memo";

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /memo?type_id=&atsukai_id=
///
/// Exact lookup. Responds with the memo, or `null` when none exists, so the
/// caller can render an empty editor without treating it as an error.
pub async fn lookup(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<MemoLookup>,
) -> AppResult<impl IntoResponse> {
    let row = MemoRepo::find_by_pair(&state.pool, params.type_id, params.atsukai_id).await?;
    Ok(Json(row))
}

/// GET /memo/list?atsukai_id=&type_id=
pub async fn list(
    State(state): State<AppState>,
    QueryParams(filter): QueryParams<MemoFilter>,
) -> AppResult<impl IntoResponse> {
    let rows = MemoRepo::list(&state.pool, &filter).await?;
    Ok(Json(rows))
}

/// GET /memo/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = MemoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;
    Ok(Json(row))
}

/// POST /memo
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateMemo>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    let row = MemoRepo::create(&state.pool, &input).await?;
    tracing::info!(
        id = row.id,
        type_id = row.type_id,
        atsukai_id = row.atsukai_id,
        "Memo created"
    );
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /memo/{id}
pub async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    JsonBody(input): JsonBody<UpdateMemo>,
) -> AppResult<impl IntoResponse> {
    let row = MemoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;
    tracing::info!(id, "Memo updated");
    Ok(Json(row))
}

/// DELETE /memo/{id}
pub async fn delete(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = MemoRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;
    tracing::info!(id, "Memo deleted");
    Ok(Json(row))
}
