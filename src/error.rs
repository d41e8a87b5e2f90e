//! Error types for Viola.

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ViolaError>;

/// Error type for all Viola operations.
#[derive(Error, Debug)]
pub enum ViolaError {
    /// Invalid index configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid argument passed to an operation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A snapshot failed structural validation on import.
    #[error("Corrupt snapshot: {0}")]
    CorruptSnapshot(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ViolaError {
    /// Create an invalid configuration error.
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        ViolaError::InvalidConfig(message.into())
    }

    /// Create an invalid argument error.
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        ViolaError::InvalidArgument(message.into())
    }

    /// Create a corrupt snapshot error.
    pub fn corrupt_snapshot<S: Into<String>>(message: S) -> Self {
        ViolaError::CorruptSnapshot(message.into())
    }

    /// Create an internal error.
    pub fn internal<S: Into<String>>(message: S) -> Self {
        ViolaError::Internal(message.into())
    }
}
