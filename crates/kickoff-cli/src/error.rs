//! Errors surfaced by the kickoff binary.
//!
//! Every failure that reaches `main` is a [`CliError`]. It knows its exit
//! code, the hints to print under the message, and how to render itself with
//! or without colour.

use std::error::Error;
use std::fmt::Write as _;

use owo_colors::OwoColorize;
use thiserror::Error;

use kickoff_core::error::KickoffError;

pub use kickoff_core::error::ErrorCategory as CoreCategory;

pub type CliResult<T> = Result<T, CliError>;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Arguments clap accepted but kickoff cannot use.
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// A configuration value is missing or unusable.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// The scaffold or log service failed.
    #[error("Project creation failed: {0}")]
    Core(#[from] KickoffError),

    /// Console or working-folder I/O outside the core.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

/// How an error is classified for exit codes and log severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserError,
    Configuration,
    Internal,
}

impl CliError {
    /// Hints printed under the message.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message, .. } => vec![
                format!("Check your input: {message}"),
                "Run 'kickoff -?' for usage".into(),
            ],
            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {message}"),
                "Run 'kickoff config path' to find the config file".into(),
                "Set KICKOFF__LOGGING__DATA_FOLDER to choose where logs go".into(),
            ],
            Self::Core(core) => core.suggestions(),
            Self::IoError { .. } => vec![
                "Check that the current folder still exists".into(),
                "Check file permissions".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Process status: 2 for user errors, 4 for configuration, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Text for stderr. `verbose` adds the cause chain and drops the
    /// "use --verbose" hint.
    pub fn render(&self, verbose: bool, color: bool) -> String {
        let paint = Paint { color };
        let mut out = String::new();

        let _ = writeln!(out, "\n{} {self}", paint.error("error:"));

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                let _ = writeln!(out, "  {} {err}", paint.dim("caused by:"));
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let _ = writeln!(out, "\n{}", paint.hint("hints:"));
            for suggestion in &suggestions {
                let _ = writeln!(out, "  - {suggestion}");
            }
        }

        if !verbose {
            let _ = writeln!(out, "\n{}", paint.dim("Run with -v for more details."));
        }
        out
    }

    /// Emit one tracing event at the category's severity.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!(error = %self, "Rejected input"),
            ErrorCategory::Configuration => tracing::error!(error = %self, "Bad configuration"),
            ErrorCategory::Internal => tracing::error!(error = %self, "Run failed"),
        }
        if let Some(source) = self.source() {
            tracing::debug!(cause = %source, "Error cause");
        }
    }
}

/// Optional ANSI styling for [`CliError::render`].
struct Paint {
    color: bool,
}

impl Paint {
    fn error(&self, text: &str) -> String {
        if self.color {
            text.red().bold().to_string()
        } else {
            text.to_owned()
        }
    }

    fn hint(&self, text: &str) -> String {
        if self.color {
            text.yellow().bold().to_string()
        } else {
            text.to_owned()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_owned()
        }
    }
}

/// Attach a message to foreign errors while converting them to [`CliError`].
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|source| CliError::IoError {
            message: f().into(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    use kickoff_core::{application::ApplicationError, domain::DomainError};

    fn denied() -> CliError {
        CliError::Core(
            ApplicationError::FilesystemError {
                path: PathBuf::from("/p"),
                reason: "denied".into(),
            }
            .into(),
        )
    }

    #[test]
    fn config_error_mentions_env_override() {
        let err = CliError::ConfigError {
            message: "no data folder".into(),
            source: None,
        };
        assert!(
            err.suggestions()
                .iter()
                .any(|s| s.contains("KICKOFF__LOGGING__DATA_FOLDER"))
        );
    }

    #[test]
    fn core_suggestions_pass_through() {
        assert!(denied().suggestions().iter().any(|s| s.contains("permissions")));
    }

    #[test]
    fn exit_codes_follow_category() {
        let input = CliError::InvalidInput {
            message: "x".into(),
            source: None,
        };
        let config = CliError::ConfigError {
            message: "x".into(),
            source: None,
        };
        let io = CliError::IoError {
            message: "x".into(),
            source: io::Error::other("e"),
        };
        assert_eq!(input.exit_code(), 2);
        assert_eq!(config.exit_code(), 4);
        assert_eq!(io.exit_code(), 1);
        assert_eq!(denied().exit_code(), 1);
    }

    #[test]
    fn root_folder_is_a_user_error() {
        let err = CliError::Core(
            DomainError::MissingProjectName {
                path: PathBuf::from("/"),
            }
            .into(),
        );
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn plain_render_has_message_and_hints() {
        let err = CliError::InvalidInput {
            message: "empty folder".into(),
            source: None,
        };
        let text = err.render(false, false);
        assert!(text.contains("error: Invalid input: empty folder"));
        assert!(text.contains("hints:"));
        assert!(text.contains("Run with -v"));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn verbose_render_shows_cause() {
        let err = CliError::IoError {
            message: "reading folder".into(),
            source: io::Error::other("disk gone"),
        };
        let text = err.render(true, false);
        assert!(text.contains("caused by: disk gone"));
        assert!(!text.contains("Run with -v"));
    }

    #[test]
    fn colored_render_uses_ansi() {
        assert!(denied().render(false, true).contains('\u{1b}'));
    }

    #[test]
    fn io_context_becomes_message() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let err = result.with_cli_context(|| "reading config").unwrap_err();
        assert_eq!(err.to_string(), "I/O error: reading config");
    }
}
