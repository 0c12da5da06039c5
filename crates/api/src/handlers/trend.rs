//! Handler for the sensor trend view (`GET /sensors/{id}/trend`).
//!
//! Loads the sensor's full reading series, runs the forecaster from
//! `plantpulse_core`, and shapes the transport payload. Timestamps in
//! this payload are `YYYY-MM-DD HH:MM:SS` strings, the format the
//! charting frontend consumes; the row-backed endpoints emit RFC 3339.

use axum::extract::{Path, State};
use axum::Json;
use plantpulse_core::error::CoreError;
use plantpulse_core::trend::{forecast_series, ExcursionKind, TrendPoint};
use plantpulse_core::types::{DbId, Timestamp};
use plantpulse_db::repositories::{SensorReadingRepo, SensorRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Transport payload
// ---------------------------------------------------------------------------

/// Full trend payload for one sensor.
#[derive(Debug, Serialize)]
pub struct TrendResponse {
    pub sensor_id: DbId,
    pub sensor_type: String,
    pub unit: Option<String>,
    pub lower_threshold: Option<f64>,
    pub upper_threshold: Option<f64>,
    pub historical: Vec<TrendPointItem>,
    pub forecast: Vec<TrendPointItem>,
    pub excursions: Vec<ExcursionItem>,
}

/// One charted point, historical or forecast.
#[derive(Debug, Serialize)]
pub struct TrendPointItem {
    pub timestamp: String,
    pub value: f64,
}

/// One threshold violation.
#[derive(Debug, Serialize)]
pub struct ExcursionItem {
    #[serde(rename = "type")]
    pub kind: ExcursionKind,
    pub timestamp: String,
    pub value: f64,
}

/// Format a point timestamp for the chart transport.
fn format_timestamp(timestamp: Timestamp) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}

fn to_items(points: &[TrendPoint]) -> Vec<TrendPointItem> {
    points
        .iter()
        .map(|p| TrendPointItem {
            timestamp: format_timestamp(p.timestamp),
            value: p.value,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Handler
// ---------------------------------------------------------------------------

/// GET /api/v1/sensors/{id}/trend
///
/// 404s only for a nonexistent sensor. A sensor with no readings is not
/// an error: the payload simply carries empty series.
pub async fn get_trend(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<TrendResponse>> {
    let sensor = SensorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Sensor",
            id,
        }))?;

    let readings = SensorReadingRepo::series(&state.pool, id).await?;
    let points: Vec<TrendPoint> = readings
        .iter()
        .map(|r| TrendPoint {
            timestamp: r.timestamp,
            value: r.value,
        })
        .collect();

    let report = forecast_series(&points, sensor.min_value, sensor.max_value);

    let excursions = report
        .excursions
        .iter()
        .map(|e| ExcursionItem {
            kind: e.kind,
            timestamp: format_timestamp(e.timestamp),
            value: e.value,
        })
        .collect();

    Ok(Json(TrendResponse {
        sensor_id: sensor.id,
        sensor_type: sensor.sensor_type,
        unit: sensor.unit,
        lower_threshold: sensor.min_value,
        upper_threshold: sensor.max_value,
        historical: to_items(&report.historical),
        forecast: to_items(&report.forecast),
        excursions,
    }))
}
