//! Repository for the `predictions` table.

use plantpulse_core::prediction::DEFAULT_PREDICTION_STATUS;
use plantpulse_core::types::DbId;
use sqlx::PgPool;

use crate::models::prediction::{CreatePrediction, Prediction, UpdatePrediction};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, equipment_id, sensor_id, prediction_time, predicted_fault, \
     confidence_score, model_version, status, severity_level, recommended_action, \
     remarks, created_at, updated_at";

/// Provides CRUD operations for predictions.
pub struct PredictionRepo;

impl PredictionRepo {
    /// Ingest a new prediction, returning the created row.
    ///
    /// If `status` is `None` in the input, defaults to `open`.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePrediction,
    ) -> Result<Prediction, sqlx::Error> {
        let query = format!(
            "INSERT INTO predictions \
                (equipment_id, sensor_id, prediction_time, predicted_fault, confidence_score, \
                 model_version, status, severity_level, recommended_action, remarks) \
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, '{DEFAULT_PREDICTION_STATUS}'), $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Prediction>(&query)
            .bind(input.equipment_id)
            .bind(input.sensor_id)
            .bind(input.prediction_time)
            .bind(&input.predicted_fault)
            .bind(input.confidence_score)
            .bind(&input.model_version)
            .bind(&input.status)
            .bind(&input.severity_level)
            .bind(&input.recommended_action)
            .bind(&input.remarks)
            .fetch_one(pool)
            .await
    }

    /// Find a prediction by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Prediction>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM predictions WHERE id = $1");
        sqlx::query_as::<_, Prediction>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List predictions newest first, optionally filtered by equipment
    /// and/or workflow status. `limit` and `offset` are expected
    /// pre-clamped by the caller.
    pub async fn list(
        pool: &PgPool,
        equipment_id: Option<DbId>,
        status: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Prediction>, sqlx::Error> {
        let mut clauses: Vec<String> = Vec::new();
        let mut param = 0;
        if equipment_id.is_some() {
            param += 1;
            clauses.push(format!("equipment_id = ${param}"));
        }
        if status.is_some() {
            param += 1;
            clauses.push(format!("status = ${param}"));
        }
        let where_sql = if clauses.is_empty() {
            String::new()
        } else {
            format!("WHERE {} ", clauses.join(" AND "))
        };
        let query = format!(
            "SELECT {COLUMNS} FROM predictions \
             {where_sql}\
             ORDER BY prediction_time DESC \
             LIMIT ${} OFFSET ${}",
            param + 1,
            param + 2
        );

        let mut q = sqlx::query_as::<_, Prediction>(&query);
        if let Some(eid) = equipment_id {
            q = q.bind(eid);
        }
        if let Some(st) = status {
            q = q.bind(st.to_owned());
        }
        q.bind(limit).bind(offset).fetch_all(pool).await
    }

    /// Update a prediction. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePrediction,
    ) -> Result<Option<Prediction>, sqlx::Error> {
        let query = format!(
            "UPDATE predictions SET \
                predicted_fault = COALESCE($2, predicted_fault), \
                confidence_score = COALESCE($3, confidence_score), \
                model_version = COALESCE($4, model_version), \
                status = COALESCE($5, status), \
                severity_level = COALESCE($6, severity_level), \
                recommended_action = COALESCE($7, recommended_action), \
                remarks = COALESCE($8, remarks) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Prediction>(&query)
            .bind(id)
            .bind(&input.predicted_fault)
            .bind(input.confidence_score)
            .bind(&input.model_version)
            .bind(&input.status)
            .bind(&input.severity_level)
            .bind(&input.recommended_action)
            .bind(&input.remarks)
            .fetch_optional(pool)
            .await
    }

    /// Delete a prediction by ID. Returns `true` if a row was removed.
    /// Alerts referencing it cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM predictions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
