//! Infrastructure adapters for kickoff.
//!
//! This crate implements the ports defined in `kickoff-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod manifest;
pub mod stream;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use manifest::JsonManifestFormat;
pub use stream::MemoryStream;
