//! Repository for the `maintenance_events` table.

use plantpulse_core::types::DbId;
use sqlx::PgPool;

use crate::models::maintenance_event::{
    CreateMaintenanceEvent, MaintenanceEvent, UpdateMaintenanceEvent,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, equipment_id, start_time, end_time, description, status, \
     event_type, fault_code, created_at, updated_at";

/// Provides CRUD operations for maintenance events.
pub struct MaintenanceEventRepo;

impl MaintenanceEventRepo {
    /// Record a new maintenance event, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateMaintenanceEvent,
    ) -> Result<MaintenanceEvent, sqlx::Error> {
        let query = format!(
            "INSERT INTO maintenance_events \
                (equipment_id, start_time, end_time, description, status, event_type, fault_code) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MaintenanceEvent>(&query)
            .bind(input.equipment_id)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(&input.description)
            .bind(&input.status)
            .bind(&input.event_type)
            .bind(&input.fault_code)
            .fetch_one(pool)
            .await
    }

    /// Find a maintenance event by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MaintenanceEvent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM maintenance_events WHERE id = $1");
        sqlx::query_as::<_, MaintenanceEvent>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List events newest first, optionally filtered to one equipment unit.
    /// `limit` and `offset` are expected pre-clamped by the caller.
    pub async fn list(
        pool: &PgPool,
        equipment_id: Option<DbId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<MaintenanceEvent>, sqlx::Error> {
        let query = if equipment_id.is_some() {
            format!(
                "SELECT {COLUMNS} FROM maintenance_events \
                 WHERE equipment_id = $3 \
                 ORDER BY start_time DESC \
                 LIMIT $1 OFFSET $2"
            )
        } else {
            format!(
                "SELECT {COLUMNS} FROM maintenance_events \
                 ORDER BY start_time DESC \
                 LIMIT $1 OFFSET $2"
            )
        };
        let mut q = sqlx::query_as::<_, MaintenanceEvent>(&query)
            .bind(limit)
            .bind(offset);
        if let Some(eid) = equipment_id {
            q = q.bind(eid);
        }
        q.fetch_all(pool).await
    }

    /// Update a maintenance event. Only non-`None` fields in `input` are
    /// applied. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMaintenanceEvent,
    ) -> Result<Option<MaintenanceEvent>, sqlx::Error> {
        let query = format!(
            "UPDATE maintenance_events SET \
                start_time = COALESCE($2, start_time), \
                end_time = COALESCE($3, end_time), \
                description = COALESCE($4, description), \
                status = COALESCE($5, status), \
                event_type = COALESCE($6, event_type), \
                fault_code = COALESCE($7, fault_code) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MaintenanceEvent>(&query)
            .bind(id)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(&input.description)
            .bind(&input.status)
            .bind(&input.event_type)
            .bind(&input.fault_code)
            .fetch_optional(pool)
            .await
    }

    /// Delete a maintenance event by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM maintenance_events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
