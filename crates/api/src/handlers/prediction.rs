//! Handlers for the `/predictions` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use plantpulse_core::error::CoreError;
use plantpulse_core::pagination::page_window;
use plantpulse_core::prediction::validate_confidence_score;
use plantpulse_core::types::DbId;
use plantpulse_db::models::prediction::{CreatePrediction, Prediction, UpdatePrediction};
use plantpulse_db::repositories::{EquipmentRepo, PredictionRepo, SensorRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query params for `GET /predictions`.
#[derive(Debug, Deserialize)]
pub struct PredictionListQuery {
    /// Restrict to one equipment unit.
    pub equipment: Option<DbId>,
    /// Restrict to one workflow status (e.g. `open`).
    pub status: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// POST /api/v1/predictions
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePrediction>,
) -> AppResult<(StatusCode, Json<Prediction>)> {
    validate_confidence_score(input.confidence_score)?;

    EquipmentRepo::find_by_id(&state.pool, input.equipment_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Equipment",
            id: input.equipment_id,
        }))?;
    if let Some(sensor_id) = input.sensor_id {
        SensorRepo::find_by_id(&state.pool, sensor_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Sensor",
                id: sensor_id,
            }))?;
    }

    let prediction = PredictionRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(prediction)))
}

/// GET /api/v1/predictions
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PredictionListQuery>,
) -> AppResult<Json<Vec<Prediction>>> {
    let (limit, offset) = page_window(params.limit, params.offset);

    let predictions = PredictionRepo::list(
        &state.pool,
        params.equipment,
        params.status.as_deref(),
        limit,
        offset,
    )
    .await?;
    Ok(Json(predictions))
}

/// GET /api/v1/predictions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Prediction>> {
    let prediction = PredictionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Prediction",
            id,
        }))?;
    Ok(Json(prediction))
}

/// PUT /api/v1/predictions/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePrediction>,
) -> AppResult<Json<Prediction>> {
    if let Some(score) = input.confidence_score {
        validate_confidence_score(score)?;
    }

    let prediction = PredictionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Prediction",
            id,
        }))?;
    Ok(Json(prediction))
}

/// DELETE /api/v1/predictions/{id}
///
/// Hard delete; alerts referencing the prediction cascade.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = PredictionRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Prediction",
            id,
        }))
    }
}
