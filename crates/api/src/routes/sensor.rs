//! Route definitions for the `/sensors` resource.
//!
//! Sensor creation lives under `/equipment/{equipment_id}/sensors`; this
//! router covers the flat sensor surface plus the per-sensor time-series
//! sub-resources (readings, features, trend).

use axum::routing::get;
use axum::Router;

use crate::handlers::{sensor, sensor_feature, sensor_reading, trend};
use crate::state::AppState;

/// Routes mounted at `/sensors`.
///
/// ```text
/// GET    /                -> list (joined with equipment name)
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update
/// DELETE /{id}            -> delete
///
/// GET    /{id}/readings   -> series (chronological)
/// POST   /{id}/readings   -> ingest one reading
/// GET    /{id}/features   -> list_by_sensor (newest first)
/// POST   /{id}/features   -> record one feature
/// GET    /{id}/trend      -> trend + forecast + excursions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(sensor::list))
        .route(
            "/{id}",
            get(sensor::get_by_id)
                .put(sensor::update)
                .delete(sensor::delete),
        )
        .route(
            "/{id}/readings",
            get(sensor_reading::series).post(sensor_reading::create),
        )
        .route(
            "/{id}/features",
            get(sensor_feature::list_by_sensor).post(sensor_feature::create),
        )
        .route("/{id}/trend", get(trend::get_trend))
}
