//! Custom error types for ynab-pivot
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ynab-pivot operations
#[derive(Error, Debug)]
pub enum PivotError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File and stream I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Transport-level failures talking to the budgeting service
    #[error("HTTP error: {0}")]
    Http(String),

    /// The budgeting service answered with a non-success status
    #[error("API error ({status}): {detail}")]
    Api { status: u16, detail: String },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },
}

impl PivotError {
    /// Create a "not found" error for category groups
    pub fn category_group_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category group",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

impl From<std::io::Error> for PivotError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PivotError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for PivotError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Json(err.to_string())
        } else {
            Self::Http(err.to_string())
        }
    }
}

/// Result type alias for ynab-pivot operations
pub type PivotResult<T> = Result<T, PivotError>;
