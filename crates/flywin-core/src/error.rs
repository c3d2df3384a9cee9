//! Centralized error types for Flywin.

use thiserror::Error;

/// Main error type for Flywin operations.
#[derive(Error, Debug)]
pub enum FlywinError {
    #[error("Failed to call Claude API: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Claude API error (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    #[error("No text content in Claude API response")]
    EmptyResponse,

    #[error("Failed to parse audit JSON from Claude response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Audit response is not a JSON object (got {0})")]
    NotAnObject(&'static str),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for Flywin operations.
pub type FlywinResult<T> = Result<T, FlywinError>;

impl FlywinError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True when the error was caused by the caller's input rather than the upstream model.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }
}
