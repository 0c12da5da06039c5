//! Alert entity model and DTOs.

use plantpulse_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An alert row from the `alerts` table.
///
/// `acknowledged` is a plain flag toggled by operators; there is no
/// delivery pipeline behind it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Alert {
    pub id: DbId,
    pub prediction_id: Option<DbId>,
    pub alert_time: Timestamp,
    pub alert_type: String,
    pub severity: String,
    pub acknowledged: bool,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for raising an alert.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAlert {
    pub prediction_id: Option<DbId>,
    /// Defaults to the current time if omitted.
    pub alert_time: Option<Timestamp>,
    pub alert_type: String,
    pub severity: Option<String>,
    pub description: Option<String>,
}

/// DTO for updating an alert. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAlert {
    pub alert_type: Option<String>,
    pub severity: Option<String>,
    pub acknowledged: Option<bool>,
    pub description: Option<String>,
}
