//! Handlers for the `/atsukai` resource.
//!
//! Categories are ordered globally by `display_order`. New rows go to the
//! end; `/reorder` swaps two rows and `/{id}/order` overwrites one.

use atsukai_core::types::DbId;
use atsukai_core::validation::{validate_display_order, validate_input, validate_swap_pair};
use atsukai_db::models::atsukai::{CreateAtsukai, UpdateAtsukai};
use atsukai_db::models::display_order::{SetDisplayOrder, SwapOrderRequest};
use atsukai_db::repositories::AtsukaiRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use super::{not_found, resolve_swap};
use crate::error::AppResult;
use crate::extract::{JsonBody, PathParam};
use crate::state::AppState;

const ENTITY: &str = "Atsukai";

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /atsukai
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = AtsukaiRepo::list(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /atsukai/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = AtsukaiRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;
    Ok(Json(row))
}

/// POST /atsukai
///
/// The new category is placed after every existing one.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateAtsukai>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    let row = AtsukaiRepo::create(&state.pool, &input).await?;
    tracing::info!(id = row.id, display_order = row.display_order, "Atsukai created");
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /atsukai/{id}
pub async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    JsonBody(input): JsonBody<UpdateAtsukai>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    let row = AtsukaiRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;
    tracing::info!(id, "Atsukai updated");
    Ok(Json(row))
}

/// PUT /atsukai/{id}/order
///
/// Overwrite one category's display order. Other rows are left as they are.
pub async fn set_order(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    JsonBody(input): JsonBody<SetDisplayOrder>,
) -> AppResult<impl IntoResponse> {
    validate_display_order(input.display_order)?;
    let row = AtsukaiRepo::set_order(&state.pool, id, input.display_order)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;
    tracing::info!(id, display_order = row.display_order, "Atsukai order set");
    Ok(Json(row))
}

/// PUT /atsukai/reorder
///
/// Swap the display orders of `id1` and `id2` atomically.
pub async fn reorder(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<SwapOrderRequest>,
) -> AppResult<impl IntoResponse> {
    validate_swap_pair(input.id1, input.id2)?;
    let outcome = AtsukaiRepo::swap_order(&state.pool, input.id1, input.id2).await?;
    let confirmation = resolve_swap(ENTITY, outcome)?;
    tracing::info!(id1 = input.id1, id2 = input.id2, "Atsukai orders swapped");
    Ok(Json(confirmation))
}

/// DELETE /atsukai/{id}
///
/// Dependent types, memos and kiji rows are removed with it.
pub async fn delete(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = AtsukaiRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;
    tracing::info!(id, "Atsukai deleted");
    Ok(Json(row))
}
