//! Handlers for the `/alerts` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use plantpulse_core::error::CoreError;
use plantpulse_core::pagination::page_window;
use plantpulse_core::types::DbId;
use plantpulse_db::models::alert::{Alert, CreateAlert, UpdateAlert};
use plantpulse_db::repositories::{AlertRepo, PredictionRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query params for `GET /alerts`.
#[derive(Debug, Deserialize)]
pub struct AlertListQuery {
    /// Filter by acknowledgement state.
    pub acknowledged: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// POST /api/v1/alerts
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAlert>,
) -> AppResult<(StatusCode, Json<Alert>)> {
    if let Some(prediction_id) = input.prediction_id {
        PredictionRepo::find_by_id(&state.pool, prediction_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Prediction",
                id: prediction_id,
            }))?;
    }

    let alert = AlertRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(alert)))
}

/// GET /api/v1/alerts
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<AlertListQuery>,
) -> AppResult<Json<Vec<Alert>>> {
    let (limit, offset) = page_window(params.limit, params.offset);

    let alerts = AlertRepo::list(&state.pool, params.acknowledged, limit, offset).await?;
    Ok(Json(alerts))
}

/// GET /api/v1/alerts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Alert>> {
    let alert = AlertRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Alert",
            id,
        }))?;
    Ok(Json(alert))
}

/// PUT /api/v1/alerts/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAlert>,
) -> AppResult<Json<Alert>> {
    let alert = AlertRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Alert",
            id,
        }))?;
    Ok(Json(alert))
}

/// POST /api/v1/alerts/{id}/acknowledge
///
/// Idempotent: acknowledging an already-acknowledged alert succeeds.
pub async fn acknowledge(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Alert>> {
    let alert = AlertRepo::acknowledge(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Alert",
            id,
        }))?;
    Ok(Json(alert))
}

/// DELETE /api/v1/alerts/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = AlertRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Alert",
            id,
        }))
    }
}
