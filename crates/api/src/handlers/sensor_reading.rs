//! Handlers for sensor readings.
//!
//! Per-sensor ingest and series live under `/sensors/{id}/readings`; the
//! flat `/readings` endpoint pages through the newest readings across the
//! whole fleet.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use plantpulse_core::error::CoreError;
use plantpulse_core::pagination::page_window;
use plantpulse_core::types::DbId;
use plantpulse_db::models::sensor_reading::{CreateSensorReading, SensorReading};
use plantpulse_db::repositories::{SensorReadingRepo, SensorRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query params for `GET /readings`.
#[derive(Debug, Deserialize)]
pub struct LatestReadingsQuery {
    /// Restrict to one sensor.
    pub sensor: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// POST /api/v1/sensors/{id}/readings
///
/// A second reading for the same sensor at the same instant is rejected
/// with 409 by the unique constraint.
pub async fn create(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateSensorReading>,
) -> AppResult<(StatusCode, Json<SensorReading>)> {
    SensorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Sensor",
            id,
        }))?;

    let reading = SensorReadingRepo::create(&state.pool, id, &input).await?;
    Ok((StatusCode::CREATED, Json(reading)))
}

/// GET /api/v1/sensors/{id}/readings
///
/// The full chronological series for one sensor, oldest first. This is
/// the same ordering the trend view consumes.
pub async fn series(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<SensorReading>>> {
    let readings = SensorReadingRepo::series(&state.pool, id).await?;
    Ok(Json(readings))
}

/// GET /api/v1/readings
///
/// Most recent readings first across all sensors, optionally filtered to
/// one sensor via `?sensor=`.
pub async fn latest(
    State(state): State<AppState>,
    Query(params): Query<LatestReadingsQuery>,
) -> AppResult<Json<Vec<SensorReading>>> {
    let (limit, offset) = page_window(params.limit, params.offset);

    let readings = SensorReadingRepo::latest(&state.pool, params.sensor, limit, offset).await?;
    Ok(Json(readings))
}
