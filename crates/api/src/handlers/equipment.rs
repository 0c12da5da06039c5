//! Handlers for the `/equipment` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use plantpulse_core::equipment;
use plantpulse_core::error::CoreError;
use plantpulse_core::types::DbId;
use plantpulse_db::models::equipment::{
    CreateEquipment, Equipment, EquipmentListItem, UpdateEquipment,
};
use plantpulse_db::models::sensor::Sensor;
use plantpulse_db::repositories::{EquipmentRepo, SensorRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Detail payload for a single equipment unit: the row plus its sensors.
#[derive(Debug, Serialize)]
pub struct EquipmentDetail {
    #[serde(flatten)]
    pub equipment: Equipment,
    pub sensors: Vec<Sensor>,
}

/// POST /api/v1/equipment
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateEquipment>,
) -> AppResult<(StatusCode, Json<Equipment>)> {
    if let Some(ref fuel_type) = input.fuel_type {
        equipment::validate_fuel_type(fuel_type)?;
    }
    if let Some(unit_number) = input.unit_number {
        equipment::validate_unit_number(unit_number)?;
    }

    let created = EquipmentRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/equipment
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<EquipmentListItem>>> {
    let items = EquipmentRepo::list(&state.pool).await?;
    Ok(Json(items))
}

/// GET /api/v1/equipment/{id}
///
/// Returns the equipment row with its sensors attached.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<EquipmentDetail>> {
    let found = EquipmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Equipment",
            id,
        }))?;
    let sensors = SensorRepo::list_by_equipment(&state.pool, id).await?;

    Ok(Json(EquipmentDetail {
        equipment: found,
        sensors,
    }))
}

/// PUT /api/v1/equipment/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEquipment>,
) -> AppResult<Json<Equipment>> {
    if let Some(ref fuel_type) = input.fuel_type {
        equipment::validate_fuel_type(fuel_type)?;
    }
    if let Some(unit_number) = input.unit_number {
        equipment::validate_unit_number(unit_number)?;
    }

    let updated = EquipmentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Equipment",
            id,
        }))?;
    Ok(Json(updated))
}

/// DELETE /api/v1/equipment/{id}
///
/// Hard delete; sensors, readings, events, and predictions cascade.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = EquipmentRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Equipment",
            id,
        }))
    }
}
