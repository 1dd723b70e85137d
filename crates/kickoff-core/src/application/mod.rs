//! Application layer for kickoff.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, LogService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Parameters & streams**: The resolved inputs of a run and the streams it
//!   writes to
//! - **Errors**: Application-specific error types
//!
//! The application layer sequences the domain's artifact table against the
//! ports; what the artifacts are lives in `crate::domain`.

pub mod error;
pub mod parameters;
pub mod ports;
pub mod services;
pub mod streams;

// Re-export main services
pub use services::{LogEntry, LogService, ScaffoldService};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, ManifestFormat};

pub use error::ApplicationError;
pub use parameters::RunParameters;
pub use streams::{LogStreams, VERBOSE_PREFIX, VerboseStream};
