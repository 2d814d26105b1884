//! Route definitions for categories.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::atsukai;
use crate::state::AppState;

/// Routes mounted at `/atsukai`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// PUT    /reorder       -> reorder
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
/// PUT    /{id}/order    -> set_order
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(atsukai::list).post(atsukai::create))
        .route("/reorder", put(atsukai::reorder))
        .route(
            "/{id}",
            get(atsukai::get_by_id)
                .put(atsukai::update)
                .delete(atsukai::delete),
        )
        .route("/{id}/order", put(atsukai::set_order))
}
