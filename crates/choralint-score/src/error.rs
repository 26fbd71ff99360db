//! Top-level error type for score operations.

use thiserror::Error;

/// Errors from loading or validating a score value.
#[derive(Debug, Error)]
pub enum ScoreError {
    /// Score validation failed with one or more errors.
    #[error("score validation failed with {0} error(s)")]
    ValidationFailed(usize),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
