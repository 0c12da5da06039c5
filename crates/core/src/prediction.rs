//! Prediction domain rules.
//!
//! Predictions are stored rows produced by an external modelling pipeline;
//! this module only validates what ingestion accepts.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

/// Workflow status assigned to a prediction when a create request omits one.
pub const DEFAULT_PREDICTION_STATUS: &str = "open";

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate that a model confidence score is a probability.
///
/// Rejects anything outside `[0, 1]`, including NaN.
pub fn validate_confidence_score(score: f64) -> Result<(), CoreError> {
    if (0.0..=1.0).contains(&score) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Confidence score must be between 0 and 1 (got {score})"
        )))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
