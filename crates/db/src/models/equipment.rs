//! Equipment entity model and DTOs.

use chrono::NaiveDate;
use plantpulse_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An equipment row from the `equipment` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Equipment {
    pub id: DbId,
    pub name: String,
    pub project_name: String,
    pub fuel_type: String,
    pub unit_number: Option<i32>,
    pub capacity_mw: Option<f64>,
    pub location: String,
    pub commissioning_date: Option<NaiveDate>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An equipment row with its sensor count, as returned by list queries.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EquipmentListItem {
    pub id: DbId,
    pub name: String,
    pub project_name: String,
    pub fuel_type: String,
    pub unit_number: Option<i32>,
    pub capacity_mw: Option<f64>,
    pub location: String,
    pub commissioning_date: Option<NaiveDate>,
    pub status: String,
    pub sensor_count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering new equipment.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEquipment {
    pub name: String,
    /// Defaults to `Unknown Project` if omitted.
    pub project_name: Option<String>,
    /// Defaults to `hydro` if omitted.
    pub fuel_type: Option<String>,
    pub unit_number: Option<i32>,
    pub capacity_mw: Option<f64>,
    pub location: Option<String>,
    pub commissioning_date: Option<NaiveDate>,
    pub status: Option<String>,
}

/// DTO for updating equipment. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEquipment {
    pub name: Option<String>,
    pub project_name: Option<String>,
    pub fuel_type: Option<String>,
    pub unit_number: Option<i32>,
    pub capacity_mw: Option<f64>,
    pub location: Option<String>,
    pub commissioning_date: Option<NaiveDate>,
    pub status: Option<String>,
}
