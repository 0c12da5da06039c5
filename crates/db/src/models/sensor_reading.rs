//! Sensor reading entity model and DTOs.
//!
//! Readings are immutable time-series rows: there is no update DTO, only
//! create and delete.

use plantpulse_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A reading row from the `sensor_readings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SensorReading {
    pub id: DbId,
    pub sensor_id: DbId,
    pub timestamp: Timestamp,
    pub value: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for ingesting one reading. The sensor comes from the request path.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSensorReading {
    pub timestamp: Timestamp,
    pub value: f64,
}
