use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Payload for the liveness probe.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database does not answer.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

/// GET /health
///
/// Always 200; a broken database shows up in the body, not the status
/// code, so probes can tell "down" from "degraded".
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match plantpulse_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Database health check failed");
            false
        }
    };

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Mounted at the root, outside the `/api/v1` nest.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
