//! Route definitions for types.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::atsukai_type;
use crate::state::AppState;

/// Routes mounted at `/type`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// PUT    /reorder       -> reorder
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(atsukai_type::list).post(atsukai_type::create))
        .route("/reorder", put(atsukai_type::reorder))
        .route(
            "/{id}",
            get(atsukai_type::get_by_id)
                .put(atsukai_type::update)
                .delete(atsukai_type::delete),
        )
}
