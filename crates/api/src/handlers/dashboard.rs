//! Handlers for the dashboard aggregate endpoints.
//!
//! Both endpoints wrap their payloads in the `{ "data": ... }` envelope
//! via [`DataResponse`].

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use plantpulse_core::equipment::fuel_type_label;
use plantpulse_db::repositories::DashboardRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// One slice of the fleet composition charts.
#[derive(Debug, Serialize)]
pub struct FuelMixItem {
    pub fuel_type: String,
    /// Display label, e.g. `Hydro` for `hydro`.
    pub label: String,
    pub equipment_count: i64,
    pub total_capacity_mw: f64,
}

/// GET /api/v1/dashboard/summary
///
/// Entity counts for the dashboard header.
pub async fn summary(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let counts = DashboardRepo::summary(&state.pool).await?;
    Ok(Json(DataResponse { data: counts }))
}

/// GET /api/v1/dashboard/fuel-mix
///
/// Fleet composition per fuel type, largest installed capacity first.
pub async fn fuel_mix(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = DashboardRepo::fuel_mix(&state.pool).await?;

    let items: Vec<FuelMixItem> = rows
        .into_iter()
        .map(|row| FuelMixItem {
            label: fuel_type_label(&row.fuel_type).to_string(),
            fuel_type: row.fuel_type,
            equipment_count: row.equipment_count,
            total_capacity_mw: row.total_capacity_mw,
        })
        .collect();

    Ok(Json(DataResponse { data: items }))
}
