//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not business
//! logic. Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The entry a create call targeted is already there.
    #[error("{path} already exists")]
    AlreadyExists { path: PathBuf },

    /// Writing to the output, diagnostic, or log stream failed.
    #[error("Stream write failed ({stream}): {reason}")]
    StreamError { stream: &'static str, reason: String },

    /// The manifest could not be serialized.
    #[error("Manifest serialization failed: {reason}")]
    SerializationFailed { reason: String },

    /// Shared adapter state is unusable (lock poisoned).
    #[error("Adapter state lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::AlreadyExists { path } => vec![
                format!("Something is already at {}", path.display()),
                "Remove it or choose another folder".into(),
            ],
            Self::StreamError { stream, .. } => vec![
                format!("Could not write to the {stream} stream"),
                "Check available disk space and that the terminal is still attached".into(),
            ],
            Self::StoreLockError => vec!["Try again in a moment".into()],
            Self::SerializationFailed { .. } => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AlreadyExists { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. }
            | Self::StreamError { .. }
            | Self::SerializationFailed { .. }
            | Self::StoreLockError => ErrorCategory::Internal,
        }
    }

    /// Wrap a stream `io::Error`.
    pub fn stream(stream: &'static str, err: std::io::Error) -> Self {
        Self::StreamError {
            stream,
            reason: err.to_string(),
        }
    }
}
