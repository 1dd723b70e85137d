// ============================================================================
// domain/error.rs - DOMAIN RULE VIOLATIONS
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Root domain error type.
///
/// Existing folders, manifests and artifacts are *not* errors; they are
/// ordinary branches of the scaffold procedure. Only inputs the domain cannot
/// derive a project from end up here.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// The project folder has no final path segment to name the project after.
    #[error("cannot derive a project name from folder '{path}'")]
    MissingProjectName { path: PathBuf },

    /// The project name is not valid UTF-8 and cannot be rendered into text.
    #[error("project name in folder '{path}' is not valid UTF-8")]
    NonUnicodeProjectName { path: PathBuf },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingProjectName { path } => vec![
                format!("'{}' has no folder name to use as the project name", path.display()),
                "Pass a named folder, e.g. kickoff ./my-project".into(),
            ],
            Self::NonUnicodeProjectName { path } => vec![
                format!("Rename '{}' using UTF-8 characters", path.display()),
            ],
        }
    }
}
