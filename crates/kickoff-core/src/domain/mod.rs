// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for kickoff.
//!
//! This module contains the pure description of a scaffold: which artifacts
//! exist, in which order, and what their contents are. All I/O is handled via
//! ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: No filesystem, stream, or process access
//! - **No external crates**: Only std library + thiserror (+ serde derive for
//!   the manifest record)
//! - **Static data**: The artifact table is a `static`, the loop over it is
//!   data driven
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod templates;

// Re-exports for convenience
pub use entities::{
    artifact::{
        ARTIFACTS, Artifact, ArtifactKind, ArtifactSpec, FileContent, MANIFEST_FILE_NAME,
        RenderFn, folder_display,
    },
    outcome::{EXIT_NOT_RUN, EXIT_SUCCESS, ScaffoldOutcome, ScaffoldStatus},
    project::{INITIAL_VERSION, PUBLISHER, ProjectDescriptor, ProjectManifest, ProjectSignature},
};

pub use error::DomainError;
