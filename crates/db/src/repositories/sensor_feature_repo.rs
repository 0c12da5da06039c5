//! Repository for the `sensor_features` table.

use plantpulse_core::types::DbId;
use sqlx::PgPool;

use crate::models::sensor_feature::{CreateSensorFeature, SensorFeature};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, sensor_id, timestamp, feature_type, feature_value, created_at, updated_at";

/// Provides ingest and list queries for derived sensor features.
pub struct SensorFeatureRepo;

impl SensorFeatureRepo {
    /// Record one derived feature, returning the created row.
    pub async fn create(
        pool: &PgPool,
        sensor_id: DbId,
        input: &CreateSensorFeature,
    ) -> Result<SensorFeature, sqlx::Error> {
        let query = format!(
            "INSERT INTO sensor_features (sensor_id, timestamp, feature_type, feature_value) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SensorFeature>(&query)
            .bind(sensor_id)
            .bind(input.timestamp)
            .bind(&input.feature_type)
            .bind(input.feature_value)
            .fetch_one(pool)
            .await
    }

    /// Find a feature by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SensorFeature>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sensor_features WHERE id = $1");
        sqlx::query_as::<_, SensorFeature>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Features for one sensor, newest first. `limit` and `offset` are
    /// expected pre-clamped by the caller.
    pub async fn list_by_sensor(
        pool: &PgPool,
        sensor_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<SensorFeature>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sensor_features \
             WHERE sensor_id = $1 \
             ORDER BY timestamp DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, SensorFeature>(&query)
            .bind(sensor_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Delete a feature by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sensor_features WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
