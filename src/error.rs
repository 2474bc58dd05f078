//! Error types for emeprobe.

use thiserror::Error;

/// Main error type for emeprobe operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A raw response map is missing a required member.
    #[error("Response is missing required field `{0}`")]
    MissingField(&'static str),

    /// A raw response map or script reply had an unexpected shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// JSON (de)serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The script evaluator failed to run the probe script.
    #[error("Script evaluation failed: {0}")]
    Evaluate(String),

    /// The host web view reported a failure outside the probe protocol.
    #[error("Host error: {0}")]
    Host(String),
}

/// Result type alias for emeprobe operations.
pub type Result<T> = std::result::Result<T, Error>;
