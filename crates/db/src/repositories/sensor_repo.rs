//! Repository for the `sensors` table.

use plantpulse_core::types::DbId;
use sqlx::PgPool;

use crate::models::sensor::{CreateSensor, Sensor, SensorListItem, UpdateSensor};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, equipment_id, sensor_type, unit, min_value, max_value, created_at, updated_at";

/// Provides CRUD operations for sensors.
pub struct SensorRepo;

impl SensorRepo {
    /// Mount a new sensor on an equipment unit, returning the created row.
    pub async fn create(
        pool: &PgPool,
        equipment_id: DbId,
        input: &CreateSensor,
    ) -> Result<Sensor, sqlx::Error> {
        let query = format!(
            "INSERT INTO sensors (equipment_id, sensor_type, unit, min_value, max_value) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sensor>(&query)
            .bind(equipment_id)
            .bind(&input.sensor_type)
            .bind(&input.unit)
            .bind(input.min_value)
            .bind(input.max_value)
            .fetch_one(pool)
            .await
    }

    /// Find a sensor by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Sensor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sensors WHERE id = $1");
        sqlx::query_as::<_, Sensor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all sensors joined with their equipment name, ordered by
    /// equipment name then sensor type.
    pub async fn list(pool: &PgPool) -> Result<Vec<SensorListItem>, sqlx::Error> {
        let query = "\
            SELECT s.id, s.equipment_id, e.name AS equipment_name, s.sensor_type, \
                   s.unit, s.min_value, s.max_value, s.created_at, s.updated_at \
            FROM sensors s \
            JOIN equipment e ON e.id = s.equipment_id \
            ORDER BY e.name, s.sensor_type";
        sqlx::query_as::<_, SensorListItem>(query)
            .fetch_all(pool)
            .await
    }

    /// List the sensors mounted on one equipment unit, ordered by type.
    pub async fn list_by_equipment(
        pool: &PgPool,
        equipment_id: DbId,
    ) -> Result<Vec<Sensor>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sensors WHERE equipment_id = $1 ORDER BY sensor_type"
        );
        sqlx::query_as::<_, Sensor>(&query)
            .bind(equipment_id)
            .fetch_all(pool)
            .await
    }

    /// Update a sensor. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSensor,
    ) -> Result<Option<Sensor>, sqlx::Error> {
        let query = format!(
            "UPDATE sensors SET \
                sensor_type = COALESCE($2, sensor_type), \
                unit = COALESCE($3, unit), \
                min_value = COALESCE($4, min_value), \
                max_value = COALESCE($5, max_value) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sensor>(&query)
            .bind(id)
            .bind(&input.sensor_type)
            .bind(&input.unit)
            .bind(input.min_value)
            .bind(input.max_value)
            .fetch_optional(pool)
            .await
    }

    /// Delete a sensor by ID. Returns `true` if a row was removed.
    /// Readings and features cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sensors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
