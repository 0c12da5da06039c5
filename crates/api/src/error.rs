//! HTTP error surface.
//!
//! Every handler returns [`AppResult`]. Domain failures arrive as
//! [`CoreError`] and database failures as [`sqlx::Error`]; both convert
//! with `?` and render as a JSON body of the form
//! `{"error": "...", "code": "..."}` with a matching status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use plantpulse_core::error::CoreError;
use serde_json::json;

/// Error type returned by every handler in this crate.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `plantpulse_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Anything sqlx reports, from connection loss to constraint hits.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Return type of every handler.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => core_error_parts(core),
            AppError::Database(err) => db_error_parts(err),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn core_error_parts(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
        ),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal core error");
            internal_parts()
        }
    }
}

/// Map a sqlx error to response parts.
///
/// `RowNotFound` is a 404. A PostgreSQL unique violation (23505) on one
/// of our `uq_*` constraints is a 409; the constraint name is safe to
/// echo. Anything else logs the real error and answers with a sanitized
/// 500.
fn db_error_parts(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value for unique constraint {constraint}"),
                    );
                }
            }
            tracing::error!(error = %db_err, "Database operation failed");
            internal_parts()
        }
        other => {
            tracing::error!(error = %other, "Database operation failed");
            internal_parts()
        }
    }
}

fn internal_parts() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
