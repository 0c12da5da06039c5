//! Dashboard aggregate rows.
//!
//! These are not table-backed entities; they are the shapes returned by
//! the aggregate queries in `DashboardRepo`.

use serde::Serialize;
use sqlx::FromRow;

/// Entity counts for the dashboard summary header.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DashboardSummary {
    pub equipment_count: i64,
    pub sensor_count: i64,
    pub reading_count: i64,
    pub prediction_count: i64,
    pub unacknowledged_alert_count: i64,
}

/// Fleet composition for one fuel type: how many units and how much
/// installed capacity. Feeds the dashboard's pie and bar charts.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FuelMixRow {
    pub fuel_type: String,
    pub equipment_count: i64,
    pub total_capacity_mw: f64,
}
