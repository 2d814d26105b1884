//! Route definitions for `kiji2`.

use axum::routing::get;
use axum::Router;

use crate::handlers::kiji2;
use crate::state::AppState;

/// Routes mounted at `/kiji2`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(kiji2::list).post(kiji2::create))
        .route(
            "/{id}",
            get(kiji2::get_by_id).put(kiji2::update).delete(kiji2::delete),
        )
}
