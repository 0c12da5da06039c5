//! Route definitions for the flat `/readings` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::sensor_reading;
use crate::state::AppState;

/// Routes mounted at `/readings`.
///
/// ```text
/// GET /   -> latest readings across all sensors (?sensor= filter)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(sensor_reading::latest))
}
