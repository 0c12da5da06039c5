//! Repository for the `sensor_readings` table.

use plantpulse_core::types::DbId;
use sqlx::PgPool;

use crate::models::sensor_reading::{CreateSensorReading, SensorReading};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, sensor_id, timestamp, value, created_at, updated_at";

/// Provides ingest and series queries for sensor readings.
pub struct SensorReadingRepo;

impl SensorReadingRepo {
    /// Ingest one reading, returning the created row.
    ///
    /// A second reading for the same sensor at the same instant violates
    /// `uq_sensor_readings_sensor_id_timestamp`.
    pub async fn create(
        pool: &PgPool,
        sensor_id: DbId,
        input: &CreateSensorReading,
    ) -> Result<SensorReading, sqlx::Error> {
        let query = format!(
            "INSERT INTO sensor_readings (sensor_id, timestamp, value) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SensorReading>(&query)
            .bind(sensor_id)
            .bind(input.timestamp)
            .bind(input.value)
            .fetch_one(pool)
            .await
    }

    /// Find a reading by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SensorReading>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sensor_readings WHERE id = $1");
        sqlx::query_as::<_, SensorReading>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// The full chronological series for one sensor, oldest first.
    ///
    /// This ordering is what the trend view's regression runs over.
    pub async fn series(
        pool: &PgPool,
        sensor_id: DbId,
    ) -> Result<Vec<SensorReading>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sensor_readings WHERE sensor_id = $1 ORDER BY timestamp"
        );
        sqlx::query_as::<_, SensorReading>(&query)
            .bind(sensor_id)
            .fetch_all(pool)
            .await
    }

    /// Most recent readings first, optionally filtered to one sensor.
    /// `limit` and `offset` are expected pre-clamped by the caller.
    pub async fn latest(
        pool: &PgPool,
        sensor_id: Option<DbId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<SensorReading>, sqlx::Error> {
        let query = if sensor_id.is_some() {
            format!(
                "SELECT {COLUMNS} FROM sensor_readings \
                 WHERE sensor_id = $3 \
                 ORDER BY timestamp DESC \
                 LIMIT $1 OFFSET $2"
            )
        } else {
            format!(
                "SELECT {COLUMNS} FROM sensor_readings \
                 ORDER BY timestamp DESC \
                 LIMIT $1 OFFSET $2"
            )
        };
        let mut q = sqlx::query_as::<_, SensorReading>(&query)
            .bind(limit)
            .bind(offset);
        if let Some(sid) = sensor_id {
            q = q.bind(sid);
        }
        q.fetch_all(pool).await
    }

    /// Delete a reading by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sensor_readings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
