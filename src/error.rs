//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when working with an address book.
#[derive(Error, Debug)]
pub enum BookError {
    /// A field value was rejected
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record with the given name
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Reading or writing the book file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The book file is not a valid book document
    #[error("Malformed address book file {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A stored record holds a value that fails validation
    #[error("Invalid record #{index} ({name}) in {}: {source}", .path.display())]
    InvalidRecord {
        path: PathBuf,
        index: usize,
        name: String,
        #[source]
        source: ValidationError,
    },

    /// Failed to serialize the book
    #[error("Serialization error: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl BookError {
    /// Whether the error came from reading or writing the book file.
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            Self::Io { .. } | Self::Malformed { .. } | Self::InvalidRecord { .. } | Self::Serialize(_)
        )
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
