//! Handlers for derived sensor features (`/sensors/{id}/features`).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use plantpulse_core::error::CoreError;
use plantpulse_core::pagination::page_window;
use plantpulse_core::types::DbId;
use plantpulse_db::models::sensor_feature::{CreateSensorFeature, SensorFeature};
use plantpulse_db::repositories::{SensorFeatureRepo, SensorRepo};

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::state::AppState;

/// POST /api/v1/sensors/{id}/features
pub async fn create(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateSensorFeature>,
) -> AppResult<(StatusCode, Json<SensorFeature>)> {
    SensorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Sensor",
            id,
        }))?;

    let feature = SensorFeatureRepo::create(&state.pool, id, &input).await?;
    Ok((StatusCode::CREATED, Json(feature)))
}

/// GET /api/v1/sensors/{id}/features
///
/// Newest first.
pub async fn list_by_sensor(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<SensorFeature>>> {
    let (limit, offset) = page_window(params.limit, params.offset);

    let features = SensorFeatureRepo::list_by_sensor(&state.pool, id, limit, offset).await?;
    Ok(Json(features))
}
