//! Fault prediction entity model and DTOs.
//!
//! Rows are produced by an external modelling pipeline and ingested as-is;
//! no inference happens in this service.

use plantpulse_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A prediction row from the `predictions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Prediction {
    pub id: DbId,
    pub equipment_id: DbId,
    /// The sensor that drove the prediction. Nulled if that sensor is
    /// later removed.
    pub sensor_id: Option<DbId>,
    pub prediction_time: Timestamp,
    pub predicted_fault: String,
    pub confidence_score: f64,
    pub model_version: String,
    pub status: String,
    pub severity_level: Option<String>,
    pub recommended_action: Option<String>,
    pub remarks: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for ingesting a prediction.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePrediction {
    pub equipment_id: DbId,
    pub sensor_id: Option<DbId>,
    pub prediction_time: Timestamp,
    pub predicted_fault: String,
    pub confidence_score: f64,
    pub model_version: String,
    /// Defaults to `open` if omitted.
    pub status: Option<String>,
    pub severity_level: Option<String>,
    pub recommended_action: Option<String>,
    pub remarks: Option<String>,
}

/// DTO for updating a prediction. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePrediction {
    pub predicted_fault: Option<String>,
    pub confidence_score: Option<f64>,
    pub model_version: Option<String>,
    pub status: Option<String>,
    pub severity_level: Option<String>,
    pub recommended_action: Option<String>,
    pub remarks: Option<String>,
}
