//! Handlers for the `/type` resource.
//!
//! Types are ordered within their category (`atsukai_order`), so swaps
//! across categories are rejected.

use atsukai_core::types::DbId;
use atsukai_core::validation::{validate_display_order, validate_input, validate_swap_pair};
use atsukai_db::models::atsukai_type::{CreateAtsukaiType, TypeFilter, UpdateAtsukaiType};
use atsukai_db::models::display_order::SwapOrderRequest;
use atsukai_db::repositories::AtsukaiTypeRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use super::{not_found, resolve_swap};
use crate::error::AppResult;
use crate::extract::{JsonBody, PathParam, QueryParams};
use crate::state::AppState;

const ENTITY: &str = "Type";

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /type?atsukai_order=
pub async fn list(
    State(state): State<AppState>,
    QueryParams(filter): QueryParams<TypeFilter>,
) -> AppResult<impl IntoResponse> {
    let rows = AtsukaiTypeRepo::list(&state.pool, &filter).await?;
    Ok(Json(rows))
}

/// GET /type/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = AtsukaiTypeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;
    Ok(Json(row))
}

/// POST /type
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateAtsukaiType>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    let row = AtsukaiTypeRepo::create(&state.pool, &input).await?;
    tracing::info!(
        id = row.id,
        atsukai_order = row.atsukai_order,
        display_order = row.display_order,
        "Type created"
    );
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /type/{id}
///
/// Partial update: only the fields present in the body change.
pub async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    JsonBody(input): JsonBody<UpdateAtsukaiType>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    if let Some(order) = input.display_order {
        validate_display_order(order)?;
    }
    let row = AtsukaiTypeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;
    tracing::info!(id, "Type updated");
    Ok(Json(row))
}

/// PUT /type/reorder
pub async fn reorder(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<SwapOrderRequest>,
) -> AppResult<impl IntoResponse> {
    validate_swap_pair(input.id1, input.id2)?;
    let outcome = AtsukaiTypeRepo::swap_order(&state.pool, input.id1, input.id2).await?;
    let confirmation = resolve_swap(ENTITY, outcome)?;
    tracing::info!(id1 = input.id1, id2 = input.id2, "Type orders swapped");
    Ok(Json(confirmation))
}

/// DELETE /type/{id}
pub async fn delete(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = AtsukaiTypeRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;
    tracing::info!(id, "Type deleted");
    Ok(Json(row))
}
