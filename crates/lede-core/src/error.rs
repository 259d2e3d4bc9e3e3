//! Error types for the Lede application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire Lede application.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait. Every variant carries a
/// human-readable message; nothing here is fatal to the process.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum LedeError {
    /// The page yielded no usable article text
    #[error("Extraction failed: {0}")]
    Extraction(String),

    /// The page itself could not be fetched or read
    #[error("Page error: {0}")]
    Page(String),

    /// The remote assistant service rejected or failed the call
    #[error("Assistant service error: {message}")]
    Api {
        /// HTTP status, if the service answered at all
        status: Option<u16>,
        message: String,
        /// Whether retrying the same call by hand is worthwhile
        retryable: bool,
    },

    /// Conversation store access error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound { entity_type: String, id: String },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl LedeError {
    /// Creates an Extraction error
    pub fn extraction(message: impl Into<String>) -> Self {
        Self::Extraction(message.into())
    }

    /// Creates a Page error
    pub fn page(message: impl Into<String>) -> Self {
        Self::Page(message.into())
    }

    /// Creates an Api error
    pub fn api(status: Option<u16>, message: impl Into<String>, retryable: bool) -> Self {
        Self::Api {
            status,
            message: message.into(),
            retryable,
        }
    }

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if retrying the operation by hand could succeed.
    ///
    /// Only Api errors carry retryability metadata; every other failure class
    /// needs the input (page, configuration, store) to change first.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Api { retryable: true, .. })
    }
}

impl From<std::io::Error> for LedeError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(format!("{} (kind: {:?})", err, err.kind()))
    }
}

/// A type alias for `Result<T, LedeError>`.
pub type Result<T> = std::result::Result<T, LedeError>;
