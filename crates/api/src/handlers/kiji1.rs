//! Handlers for the `/kiji1` resource.

use atsukai_core::types::DbId;
use atsukai_core::validation::validate_input;
use atsukai_db::models::kiji1::{CreateKiji1, Kiji1Filter, UpdateKiji1};
use atsukai_db::repositories::Kiji1Repo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use super::not_found;
use crate::error::AppResult;
use crate::extract::{JsonBody, PathParam, QueryParams};
use crate::state::AppState;

const ENTITY: &str = "Kiji1";

/// GET /kiji1?atsukai_id=&type_id=
pub async fn list(
    State(state): State<AppState>,
    QueryParams(filter): QueryParams<Kiji1Filter>,
) -> AppResult<impl IntoResponse> {
    let rows = Kiji1Repo::list(&state.pool, &filter).await?;
    Ok(Json(rows))
}

/// GET /kiji1/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = Kiji1Repo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;
    Ok(Json(row))
}

/// POST /kiji1
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateKiji1>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    let row = Kiji1Repo::create(&state.pool, &input).await?;
    tracing::info!(id = row.id, atsukai_id = row.atsukai_id, "Kiji1 created");
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /kiji1/{id}
///
/// Full replace. A missing `type_id` clears the link to the type.
pub async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    JsonBody(input): JsonBody<UpdateKiji1>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    let row = Kiji1Repo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;
    tracing::info!(id, "Kiji1 updated");
    Ok(Json(row))
}

/// DELETE /kiji1/{id}
pub async fn delete(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = Kiji1Repo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;
    tracing::info!(id, "Kiji1 deleted");
    Ok(Json(row))
}
