//! Maintenance event entity model and DTOs.

use plantpulse_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A maintenance event row from the `maintenance_events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MaintenanceEvent {
    pub id: DbId,
    pub equipment_id: DbId,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub description: String,
    /// Free-text workflow state, e.g. Scheduled, In Progress, Completed.
    pub status: String,
    pub event_type: Option<String>,
    pub fault_code: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for recording a maintenance event.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMaintenanceEvent {
    pub equipment_id: DbId,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub description: String,
    pub status: String,
    pub event_type: Option<String>,
    pub fault_code: Option<String>,
}

/// DTO for updating a maintenance event. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMaintenanceEvent {
    pub start_time: Option<Timestamp>,
    pub end_time: Option<Timestamp>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub event_type: Option<String>,
    pub fault_code: Option<String>,
}
