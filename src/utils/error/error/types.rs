//! Error types for the access layer

use thiserror::Error;

/// Result type alias for the access layer
pub type Result<T> = std::result::Result<T, AccessError>;

/// Main error type for the access layer
///
/// A denial without an item attached is a pass-through, not an error.
#[derive(Error, Debug)]
pub enum AccessError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Field-level validation errors raised by administrative submissions
    #[error("Validation error on '{field}': {message}")]
    Validation { field: String, message: String },

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unauthorized errors
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Forbidden errors
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Collaborator storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}
