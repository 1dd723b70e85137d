//! Unified error handling for kickoff core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for kickoff core operations.
#[derive(Debug, Error, Clone)]
pub enum KickoffError {
    /// Errors from the domain layer.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (I/O and orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl KickoffError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            // Every domain error is a rejection of the folder the user named.
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Application(e) => e.category(),
        }
    }

    /// `true` for the "already exists" result of a create call.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::AlreadyExists { .. }))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}

/// Convenient result type alias.
pub type KickoffResult<T> = Result<T, KickoffError>;
