//! Error types
//!
//! Errors surfaced by gender-dependent formulas, intake limits and JSON handling.

use thiserror::Error;

/// Health formula error types
#[derive(Debug, Error)]
pub enum HealthError {
    #[error("Invalid gender input '{0}'. Please enter 'M' for male or 'F' for female.")]
    InvalidGender(String),

    #[error("Aspartame content per bottle must be positive, got {0} mg")]
    NonPositiveContent(f64),

    #[error("Bottle count {0} is not a representable whole number of bottles")]
    BottleCountOutOfRange(f64),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for health formula operations
pub type HealthResult<T> = Result<T, HealthError>;
