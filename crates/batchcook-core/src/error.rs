//! Error types for the kitchen library.
//!
//! Scheduling and validation never fail: validation problems are collected
//! into a [`ValidationReport`](crate::models::ValidationReport) and the
//! computation passes are total over well-formed input. The variants below
//! cover the edges around them: loading configuration, decoding input
//! documents and the one pipeline entry point that refuses to schedule an
//! invalid session.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for kitchen operations.
#[derive(Error, Debug)]
pub enum KitchenError {
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// A session failed validation and was not scheduled
    #[error("Invalid session: {}", errors.join("; "))]
    InvalidSession { errors: Vec<String> },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> KitchenError {
        KitchenError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl KitchenError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a file system error for the given path.
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to KitchenError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| KitchenError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }
}

/// Result type alias for kitchen operations
pub type Result<T> = std::result::Result<T, KitchenError>;
