//! Handlers for the `/kiji2` resource.

use atsukai_core::types::DbId;
use atsukai_core::validation::validate_input;
use atsukai_db::models::kiji2::{CreateKiji2, Kiji2Filter, UpdateKiji2};
use atsukai_db::repositories::Kiji2Repo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use super::not_found;
use crate::error::AppResult;
use crate::extract::{JsonBody, PathParam, QueryParams};
use crate::state::AppState;

const ENTITY: &str = "Kiji2";

/// GET /kiji2?atsukai_id=&type_id=&jyoukyou_id=
pub async fn list(
    State(state): State<AppState>,
    QueryParams(filter): QueryParams<Kiji2Filter>,
) -> AppResult<impl IntoResponse> {
    let rows = Kiji2Repo::list(&state.pool, &filter).await?;
    Ok(Json(rows))
}

/// GET /kiji2/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = Kiji2Repo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;
    Ok(Json(row))
}

/// POST /kiji2
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateKiji2>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    let row = Kiji2Repo::create(&state.pool, &input).await?;
    tracing::info!(id = row.id, atsukai_id = row.atsukai_id, "Kiji2 created");
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /kiji2/{id}
///
/// Full replace. Missing `jyoukyou_id` or `type_id` are written as NULL.
pub async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    JsonBody(input): JsonBody<UpdateKiji2>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    let row = Kiji2Repo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;
    tracing::info!(id, "Kiji2 updated");
    Ok(Json(row))
}

/// DELETE /kiji2/{id}
pub async fn delete(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = Kiji2Repo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;
    tracing::info!(id, "Kiji2 deleted");
    Ok(Json(row))
}
