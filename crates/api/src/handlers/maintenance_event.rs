//! Handlers for the `/maintenance-events` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use plantpulse_core::error::CoreError;
use plantpulse_core::pagination::page_window;
use plantpulse_core::types::DbId;
use plantpulse_db::models::maintenance_event::{
    CreateMaintenanceEvent, MaintenanceEvent, UpdateMaintenanceEvent,
};
use plantpulse_db::repositories::{EquipmentRepo, MaintenanceEventRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query params for `GET /maintenance-events`.
#[derive(Debug, Deserialize)]
pub struct EventListQuery {
    /// Restrict to one equipment unit.
    pub equipment: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// POST /api/v1/maintenance-events
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMaintenanceEvent>,
) -> AppResult<(StatusCode, Json<MaintenanceEvent>)> {
    EquipmentRepo::find_by_id(&state.pool, input.equipment_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Equipment",
            id: input.equipment_id,
        }))?;

    let event = MaintenanceEventRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// GET /api/v1/maintenance-events
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<EventListQuery>,
) -> AppResult<Json<Vec<MaintenanceEvent>>> {
    let (limit, offset) = page_window(params.limit, params.offset);

    let events = MaintenanceEventRepo::list(&state.pool, params.equipment, limit, offset).await?;
    Ok(Json(events))
}

/// GET /api/v1/maintenance-events/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MaintenanceEvent>> {
    let event = MaintenanceEventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MaintenanceEvent",
            id,
        }))?;
    Ok(Json(event))
}

/// PUT /api/v1/maintenance-events/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMaintenanceEvent>,
) -> AppResult<Json<MaintenanceEvent>> {
    let event = MaintenanceEventRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MaintenanceEvent",
            id,
        }))?;
    Ok(Json(event))
}

/// DELETE /api/v1/maintenance-events/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = MaintenanceEventRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "MaintenanceEvent",
            id,
        }))
    }
}
