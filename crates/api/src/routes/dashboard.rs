//! Route definitions for the dashboard aggregate endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Routes mounted at `/dashboard`.
///
/// ```text
/// GET /summary    -> entity counts
/// GET /fuel-mix   -> fleet composition per fuel type
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/summary", get(dashboard::summary))
        .route("/fuel-mix", get(dashboard::fuel_mix))
}
