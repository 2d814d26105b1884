//! Handlers for the `/jyoukyou` resource.
//!
//! Situation records carry only free-form text, so there is nothing to
//! validate up front.

use atsukai_core::types::DbId;
use atsukai_db::models::jyoukyou::{CreateJyoukyou, UpdateJyoukyou};
use atsukai_db::repositories::JyoukyouRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use super::not_found;
use crate::error::AppResult;
use crate::extract::{JsonBody, PathParam};
use crate::state::AppState;

const ENTITY: &str = "Jyoukyou";

/// GET /jyoukyou
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = JyoukyouRepo::list(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /jyoukyou/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = JyoukyouRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;
    Ok(Json(row))
}

/// POST /jyoukyou
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateJyoukyou>,
) -> AppResult<impl IntoResponse> {
    let row = JyoukyouRepo::create(&state.pool, &input).await?;
    tracing::info!(id = row.id, "Jyoukyou created");
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /jyoukyou/{id}
pub async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    JsonBody(input): JsonBody<UpdateJyoukyou>,
) -> AppResult<impl IntoResponse> {
    let row = JyoukyouRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;
    tracing::info!(id, "Jyoukyou updated");
    Ok(Json(row))
}

/// DELETE /jyoukyou/{id}
///
/// Kiji2 rows pointing at the record keep their row with `jyoukyou_id` cleared.
pub async fn delete(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = JyoukyouRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;
    tracing::info!(id, "Jyoukyou deleted");
    Ok(Json(row))
}
