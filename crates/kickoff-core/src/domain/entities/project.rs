use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Publisher recorded in every generated manifest.
pub const PUBLISHER: &str = "qub";

/// Version recorded in every generated manifest.
pub const INITIAL_VERSION: &str = "1";

/// Identity of the project being scaffolded.
///
/// Derived from the target folder on every run and never persisted on its
/// own; it only feeds the manifest and README contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDescriptor {
    project: String,
    publisher: &'static str,
    version: &'static str,
}

impl ProjectDescriptor {
    /// Build the descriptor for a project living in `folder`.
    ///
    /// The project name is the folder's final path segment.
    pub fn for_folder(folder: &Path) -> Result<Self, DomainError> {
        let name = folder
            .file_name()
            .ok_or_else(|| DomainError::MissingProjectName {
                path: folder.to_path_buf(),
            })?;
        let project = name
            .to_str()
            .ok_or_else(|| DomainError::NonUnicodeProjectName {
                path: folder.to_path_buf(),
            })?;

        Ok(Self {
            project: project.to_string(),
            publisher: PUBLISHER,
            version: INITIAL_VERSION,
        })
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn publisher(&self) -> &str {
        self.publisher
    }

    pub fn version(&self) -> &str {
        self.version
    }

    pub fn signature(&self) -> ProjectSignature<'_> {
        ProjectSignature {
            publisher: self.publisher,
            project: &self.project,
            version: self.version,
        }
    }

    /// The manifest record describing this project.
    pub fn manifest(&self) -> ProjectManifest {
        ProjectManifest {
            project: self.project.clone(),
            publisher: self.publisher.to_string(),
            version: self.version.to_string(),
        }
    }
}

/// `publisher/project@version`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectSignature<'a> {
    publisher: &'a str,
    project: &'a str,
    version: &'a str,
}

impl ProjectSignature<'_> {
    /// `publisher/project`, used for headings.
    pub fn without_version(&self) -> String {
        format!("{}/{}", self.publisher, self.project)
    }
}

impl fmt::Display for ProjectSignature<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}@{}", self.publisher, self.project, self.version)
    }
}

/// Contents of the `project.json` manifest.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectManifest {
    pub project: String,
    pub publisher: String,
    pub version: String,
}
