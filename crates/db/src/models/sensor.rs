//! Sensor entity model and DTOs.

use plantpulse_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A sensor row from the `sensors` table.
///
/// `min_value` / `max_value` are the excursion thresholds consumed by the
/// trend view. Either may be absent and no ordering between them is
/// enforced.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Sensor {
    pub id: DbId,
    pub equipment_id: DbId,
    pub sensor_type: String,
    pub unit: Option<String>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A sensor row joined with its equipment name, as returned by the global
/// sensor list.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SensorListItem {
    pub id: DbId,
    pub equipment_id: DbId,
    pub equipment_name: String,
    pub sensor_type: String,
    pub unit: Option<String>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for mounting a new sensor. The owning equipment comes from the
/// request path, not the body.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSensor {
    pub sensor_type: String,
    pub unit: Option<String>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
}

/// DTO for updating a sensor. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSensor {
    pub sensor_type: Option<String>,
    pub unit: Option<String>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
}
