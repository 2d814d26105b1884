//! Route definitions for memos.

use axum::routing::get;
use axum::Router;

use crate::handlers::memo;
use crate::state::AppState;

/// Routes mounted at `/memo`.
///
/// ```text
/// GET    /              -> lookup (single row or null)
/// POST   /              -> create
/// GET    /list          -> list
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(memo::lookup).post(memo::create))
        .route("/list", get(memo::list))
        .route(
            "/{id}",
            get(memo::get_by_id).put(memo::update).delete(memo::delete),
        )
}
