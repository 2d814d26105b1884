//! Route definition for the health check.

use axum::routing::get;
use axum::Router;

use crate::handlers::health;
use crate::state::AppState;

/// `GET /health`, mounted at the root next to the resources.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health::check))
}
