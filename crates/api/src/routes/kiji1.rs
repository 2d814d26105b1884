//! Route definitions for `kiji1`.

use axum::routing::get;
use axum::Router;

use crate::handlers::kiji1;
use crate::state::AppState;

/// Routes mounted at `/kiji1`.
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
        .route("/", get(kiji1::list).post(kiji1::create))
        .route(
            "/{id}",
            get(kiji1::get_by_id).put(kiji1::update).delete(kiji1::delete),
        )
}
