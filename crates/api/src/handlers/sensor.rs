//! Handlers for the `/sensors` resource.
//!
//! Sensors are created under their equipment:
//! `/equipment/{equipment_id}/sensors`. The flat `/sensors` surface covers
//! listing, detail, update, and delete.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use plantpulse_core::error::CoreError;
use plantpulse_core::types::DbId;
use plantpulse_db::models::sensor::{CreateSensor, Sensor, SensorListItem, UpdateSensor};
use plantpulse_db::repositories::{EquipmentRepo, SensorRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/equipment/{equipment_id}/sensors
///
/// 404s when the owning equipment does not exist, rather than leaking the
/// foreign key violation as a 500.
pub async fn create(
    State(state): State<AppState>,
    Path(equipment_id): Path<DbId>,
    Json(input): Json<CreateSensor>,
) -> AppResult<(StatusCode, Json<Sensor>)> {
    EquipmentRepo::find_by_id(&state.pool, equipment_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Equipment",
            id: equipment_id,
        }))?;

    let sensor = SensorRepo::create(&state.pool, equipment_id, &input).await?;
    Ok((StatusCode::CREATED, Json(sensor)))
}

/// GET /api/v1/equipment/{equipment_id}/sensors
pub async fn list_by_equipment(
    State(state): State<AppState>,
    Path(equipment_id): Path<DbId>,
) -> AppResult<Json<Vec<Sensor>>> {
    let sensors = SensorRepo::list_by_equipment(&state.pool, equipment_id).await?;
    Ok(Json(sensors))
}

/// GET /api/v1/sensors
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<SensorListItem>>> {
    let sensors = SensorRepo::list(&state.pool).await?;
    Ok(Json(sensors))
}

/// GET /api/v1/sensors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Sensor>> {
    let sensor = SensorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Sensor",
            id,
        }))?;
    Ok(Json(sensor))
}

/// PUT /api/v1/sensors/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSensor>,
) -> AppResult<Json<Sensor>> {
    let sensor = SensorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Sensor",
            id,
        }))?;
    Ok(Json(sensor))
}

/// DELETE /api/v1/sensors/{id}
///
/// Hard delete; readings and features cascade.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = SensorRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Sensor",
            id,
        }))
    }
}
