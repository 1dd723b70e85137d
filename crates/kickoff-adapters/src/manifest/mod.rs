//! Manifest serialization adapters.

mod json;

pub use json::JsonManifestFormat;
