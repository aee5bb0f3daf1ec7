//! Error types for the host store.
//!
//! All errors in the system are represented by the [`Error`] enum.
//! This ensures composable error handling across crates.

use std::io;
use thiserror::Error as ThisError;

/// The core error type for all host store operations.
#[derive(ThisError, Debug)]
pub enum Error {
    /// File system error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Host name absent from the config file
    #[error("host '{name}' not found")]
    HostNotFound { name: String },

    /// Host name collision on add
    #[error("host '{name}' already exists")]
    HostAlreadyExists { name: String },

    /// Config file location could not be resolved
    #[error("invalid config path: {reason}")]
    InvalidPath { reason: String },

    /// Entry rejected by field validation
    #[error("validation error: {reason}")]
    ValidationError { reason: String },
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an IO error
    pub fn io(err: io::Error) -> Self {
        Error::Io(err)
    }

    /// Create a host not found error
    pub fn host_not_found(name: impl Into<String>) -> Self {
        Error::HostNotFound { name: name.into() }
    }

    /// Create a host already exists error
    pub fn host_already_exists(name: impl Into<String>) -> Self {
        Error::HostAlreadyExists { name: name.into() }
    }

    /// Create an invalid path error
    pub fn invalid_path(reason: impl Into<String>) -> Self {
        Error::InvalidPath {
            reason: reason.into(),
        }
    }

    /// Create a validation error
    pub fn validation_error(reason: impl Into<String>) -> Self {
        Error::ValidationError {
            reason: reason.into(),
        }
    }
}
