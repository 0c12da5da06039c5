//! Repository for the `equipment` table.

use plantpulse_core::equipment::DEFAULT_FUEL_TYPE;
use plantpulse_core::types::DbId;
use sqlx::PgPool;

use crate::models::equipment::{CreateEquipment, Equipment, EquipmentListItem, UpdateEquipment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, project_name, fuel_type, unit_number, capacity_mw, \
     location, commissioning_date, status, created_at, updated_at";

/// Same columns qualified for joined list queries.
const LIST_COLUMNS: &str = "e.id, e.name, e.project_name, e.fuel_type, e.unit_number, \
     e.capacity_mw, e.location, e.commissioning_date, e.status, e.created_at, e.updated_at";

/// Provides CRUD operations for equipment.
pub struct EquipmentRepo;

impl EquipmentRepo {
    /// Insert a new equipment row, returning the created row.
    ///
    /// Omitted `project_name`, `fuel_type`, `location`, and `status`
    /// receive their schema defaults.
    pub async fn create(pool: &PgPool, input: &CreateEquipment) -> Result<Equipment, sqlx::Error> {
        let query = format!(
            "INSERT INTO equipment \
                (name, project_name, fuel_type, unit_number, capacity_mw, \
                 location, commissioning_date, status) \
             VALUES ($1, COALESCE($2, 'Unknown Project'), COALESCE($3, '{DEFAULT_FUEL_TYPE}'), \
                     $4, $5, COALESCE($6, ''), $7, COALESCE($8, '')) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Equipment>(&query)
            .bind(&input.name)
            .bind(&input.project_name)
            .bind(&input.fuel_type)
            .bind(input.unit_number)
            .bind(input.capacity_mw)
            .bind(&input.location)
            .bind(input.commissioning_date)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Find an equipment row by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Equipment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM equipment WHERE id = $1");
        sqlx::query_as::<_, Equipment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all equipment ordered by name, each row carrying its sensor count.
    pub async fn list(pool: &PgPool) -> Result<Vec<EquipmentListItem>, sqlx::Error> {
        let query = format!(
            "SELECT {LIST_COLUMNS}, COUNT(s.id)::BIGINT AS sensor_count \
             FROM equipment e \
             LEFT JOIN sensors s ON s.equipment_id = e.id \
             GROUP BY e.id \
             ORDER BY e.name"
        );
        sqlx::query_as::<_, EquipmentListItem>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update an equipment row. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEquipment,
    ) -> Result<Option<Equipment>, sqlx::Error> {
        let query = format!(
            "UPDATE equipment SET \
                name = COALESCE($2, name), \
                project_name = COALESCE($3, project_name), \
                fuel_type = COALESCE($4, fuel_type), \
                unit_number = COALESCE($5, unit_number), \
                capacity_mw = COALESCE($6, capacity_mw), \
                location = COALESCE($7, location), \
                commissioning_date = COALESCE($8, commissioning_date), \
                status = COALESCE($9, status) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Equipment>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.project_name)
            .bind(&input.fuel_type)
            .bind(input.unit_number)
            .bind(input.capacity_mw)
            .bind(&input.location)
            .bind(input.commissioning_date)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete an equipment row by ID. Returns `true` if a row was removed.
    /// Sensors, readings, events, and predictions cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM equipment WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
