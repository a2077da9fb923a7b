//! Error types for the Folio core library.

use thiserror::Error;

use crate::{store::RecordKind, validate::ValidationError};

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types for Folio.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration loading or parsing error.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A content record failed its schema check.
    #[error("{kind} '{slug}' failed validation: {source}")]
    Validation {
        kind: RecordKind,
        slug: String,
        #[source]
        source: ValidationError,
    },

    /// File system I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic configuration crate error.
    #[error("Config crate error: {0}")]
    ConfigCrate(#[from] config::ConfigError),
}

impl CoreError {
    /// Create a new configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source.
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error for a record.
    pub fn validation(kind: RecordKind, slug: impl Into<String>, source: ValidationError) -> Self {
        Self::Validation {
            kind,
            slug: slug.into(),
            source,
        }
    }
}
