//! Derived sensor feature model and DTOs.
//!
//! Features are values computed offline from raw readings (rolling means,
//! spectral peaks, and the like) and recorded alongside them.

use plantpulse_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A feature row from the `sensor_features` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SensorFeature {
    pub id: DbId,
    pub sensor_id: DbId,
    pub timestamp: Timestamp,
    pub feature_type: String,
    pub feature_value: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for recording one derived feature. The sensor comes from the
/// request path.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSensorFeature {
    pub timestamp: Timestamp,
    pub feature_type: String,
    pub feature_value: f64,
}
