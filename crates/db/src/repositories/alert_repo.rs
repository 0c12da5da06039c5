//! Repository for the `alerts` table.

use plantpulse_core::types::DbId;
use sqlx::PgPool;

use crate::models::alert::{Alert, CreateAlert, UpdateAlert};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, prediction_id, alert_time, alert_type, severity, acknowledged, \
     description, created_at, updated_at";

/// Provides CRUD operations for alerts.
pub struct AlertRepo;

impl AlertRepo {
    /// Raise a new alert, returning the created row.
    ///
    /// If `alert_time` is `None` in the input, defaults to the current time.
    pub async fn create(pool: &PgPool, input: &CreateAlert) -> Result<Alert, sqlx::Error> {
        let query = format!(
            "INSERT INTO alerts (prediction_id, alert_time, alert_type, severity, description) \
             VALUES ($1, COALESCE($2, NOW()), $3, COALESCE($4, ''), $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Alert>(&query)
            .bind(input.prediction_id)
            .bind(input.alert_time)
            .bind(&input.alert_type)
            .bind(&input.severity)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find an alert by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Alert>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM alerts WHERE id = $1");
        sqlx::query_as::<_, Alert>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List alerts newest first, optionally filtered by acknowledgement
    /// state. `limit` and `offset` are expected pre-clamped by the caller.
    pub async fn list(
        pool: &PgPool,
        acknowledged: Option<bool>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Alert>, sqlx::Error> {
        let query = if acknowledged.is_some() {
            format!(
                "SELECT {COLUMNS} FROM alerts \
                 WHERE acknowledged = $3 \
                 ORDER BY alert_time DESC \
                 LIMIT $1 OFFSET $2"
            )
        } else {
            format!(
                "SELECT {COLUMNS} FROM alerts \
                 ORDER BY alert_time DESC \
                 LIMIT $1 OFFSET $2"
            )
        };
        let mut q = sqlx::query_as::<_, Alert>(&query).bind(limit).bind(offset);
        if let Some(ack) = acknowledged {
            q = q.bind(ack);
        }
        q.fetch_all(pool).await
    }

    /// Update an alert. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAlert,
    ) -> Result<Option<Alert>, sqlx::Error> {
        let query = format!(
            "UPDATE alerts SET \
                alert_type = COALESCE($2, alert_type), \
                severity = COALESCE($3, severity), \
                acknowledged = COALESCE($4, acknowledged), \
                description = COALESCE($5, description) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Alert>(&query)
            .bind(id)
            .bind(&input.alert_type)
            .bind(&input.severity)
            .bind(input.acknowledged)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Mark an alert acknowledged, returning the updated row.
    ///
    /// Returns `None` if no row with the given `id` exists. Idempotent:
    /// acknowledging an already-acknowledged alert is a no-op update.
    pub async fn acknowledge(pool: &PgPool, id: DbId) -> Result<Option<Alert>, sqlx::Error> {
        let query = format!(
            "UPDATE alerts SET acknowledged = TRUE WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Alert>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an alert by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM alerts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
