//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `kickoff-adapters` crate provides implementations.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::ProjectManifest;
use crate::error::KickoffResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `kickoff_adapters::filesystem::LocalFilesystem` (production)
/// - `kickoff_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - `create_dir` reports an existing entry as
///   `ApplicationError::AlreadyExists`; callers decide whether that matters
/// - `open_append` hands out an owned writer; dropping it flushes and closes
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Create a single directory whose parent already exists.
    fn create_dir(&self, path: &Path) -> KickoffResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> KickoffResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> KickoffResult<()>;

    /// Read a whole file as UTF-8.
    fn read_file(&self, path: &Path) -> KickoffResult<String>;

    /// Direct children of a directory, in no particular order.
    fn read_dir(&self, path: &Path) -> KickoffResult<Vec<PathBuf>>;

    /// Open a file for appending, creating it and its parents when missing.
    fn open_append(&self, path: &Path) -> KickoffResult<Box<dyn Write + Send>>;
}

/// Port for manifest serialization.
///
/// Implemented by:
/// - `kickoff_adapters::manifest::JsonManifestFormat` (pretty JSON)
#[cfg_attr(test, mockall::automock)]
pub trait ManifestFormat: Send + Sync {
    /// Render the manifest as canonical, formatted text.
    fn format(&self, manifest: &ProjectManifest) -> KickoffResult<String>;
}
