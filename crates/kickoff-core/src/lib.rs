//! kickoff Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the kickoff
//! project scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           kickoff-cli (CLI)             │
//! │   (Resolves RunParameters from args)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (ScaffoldService, LogService)       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │      (Filesystem, ManifestFormat)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    kickoff-adapters (Infrastructure)    │
//! │ (LocalFilesystem, JsonManifestFormat)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Artifact table, ProjectDescriptor)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kickoff_core::application::{RunParameters, ScaffoldService, VerboseStream};
//!
//! let parameters = RunParameters::new(Box::new(std::io::stdout()), "./my-project", "./data")
//!     .with_verbose(VerboseStream::new(std::io::stdout()));
//!
//! // Use application service (with injected adapters)
//! let service = ScaffoldService::new(filesystem, manifest_format);
//! let exit_code = service.run(parameters).unwrap().exit_code();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        LogEntry, LogService, RunParameters, ScaffoldService, VerboseStream,
        ports::{Filesystem, ManifestFormat},
    };
    pub use crate::domain::{
        ARTIFACTS, Artifact, EXIT_NOT_RUN, EXIT_SUCCESS, ProjectDescriptor, ProjectManifest,
        ScaffoldOutcome, ScaffoldStatus,
    };
    pub use crate::error::{KickoffError, KickoffResult};
}

