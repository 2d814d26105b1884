//! Liveness and store check.
//!
//! Reads the `atsukai` table rather than a bare `SELECT 1`, so a missing
//! migration or revoked grant shows up as `degraded`.

use atsukai_db::repositories::AtsukaiRepo;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `ok` when the store answered, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Row count of `atsukai`; absent when the store could not be read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atsukai_count: Option<i64>,
}

impl HealthReport {
    fn from_count(count: Result<i64, sqlx::Error>) -> Self {
        let atsukai_count = match count {
            Ok(n) => Some(n),
            Err(err) => {
                tracing::warn!(error = %err, "Health check could not read atsukai");
                None
            }
        };
        let db_healthy = atsukai_count.is_some();
        Self {
            status: if db_healthy { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
            atsukai_count,
        }
    }
}

/// GET /health
///
/// Always 200; the body carries the verdict.
pub async fn check(State(state): State<AppState>) -> Json<HealthReport> {
    Json(HealthReport::from_count(AtsukaiRepo::count(&state.pool).await))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readable_store_is_ok() {
        let report = HealthReport::from_count(Ok(3));
        assert_eq!(report.status, "ok");
        assert!(report.db_healthy);
        assert_eq!(report.atsukai_count, Some(3));
    }

    #[test]
    fn store_error_is_degraded() {
        let report = HealthReport::from_count(Err(sqlx::Error::PoolTimedOut));
        assert_eq!(report.status, "degraded");
        assert!(!report.db_healthy);
        assert_eq!(report.atsukai_count, None);
    }
}
