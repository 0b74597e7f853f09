//! Shared error types for the application

use thiserror::Error;

/// Main error type for seikaku operations
#[derive(Debug, Error)]
pub enum Error {
    /// Name divination requires at least one character per name part
    #[error("name divination requires a non-empty {field}")]
    EmptyName { field: &'static str },

    /// Input validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an empty-name error naming the offending field
    pub fn empty_name(field: &'static str) -> Self {
        Self::EmptyName { field }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
