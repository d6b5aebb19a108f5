//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid decimal: {0}")]
    InvalidDecimal(String),
}

/// Result type alias for SDK operations.
pub type SdkResult<T> = Result<T, SdkError>;
