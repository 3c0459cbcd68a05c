//! # Error Types
//!
//! Errors raised by the session store and the practice machine.
//!
//! Validation failures (blank text, missing upload, blank answer) are not
//! errors: they come back as [`crate::Rejection`] or
//! [`crate::practice::Transition::Rejected`] values.

use thiserror::Error;

/// Storage error
#[derive(Error, Debug)]
pub enum StorageError {
    /// IO error from a file backend
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure while encoding sessions or an export
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Backend misconfiguration
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Anything else
    #[error("Storage error: {message}")]
    Other { message: String },
}

impl StorageError {
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Practice machine error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PracticeError {
    /// The session carries no questions, so there is no `Asking(0)`.
    #[error("Session {id} has no questions to practice")]
    NoQuestions { id: i64 },
}

pub type PracticeResult<T> = Result<T, PracticeError>;
