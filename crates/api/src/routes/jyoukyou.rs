//! Route definitions for `jyoukyou`.

use axum::routing::get;
use axum::Router;

use crate::handlers::jyoukyou;
use crate::state::AppState;

/// Routes mounted at `/jyoukyou`.
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
        .route("/", get(jyoukyou::list).post(jyoukyou::create))
        .route(
            "/{id}",
            get(jyoukyou::get_by_id).put(jyoukyou::update).delete(jyoukyou::delete),
        )
}
