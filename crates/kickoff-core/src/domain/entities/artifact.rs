use std::fmt;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use crate::domain::{entities::project::ProjectDescriptor, templates};

/// File name whose presence marks a folder as an initialized project.
pub const MANIFEST_FILE_NAME: &str = "project.json";

/// One of the fixed starter entries of a scaffold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    Manifest,
    Readme,
    License,
    GitIgnore,
    SourcesFolder,
    TestsFolder,
}

impl Artifact {
    /// Table entry describing this artifact.
    pub fn spec(self) -> &'static ArtifactSpec {
        // ARTIFACTS is indexed by discriminant.
        &ARTIFACTS[self as usize]
    }

    /// Human label used in diagnostics, e.g. `README.md file`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Manifest => "project.json file",
            Self::Readme => "README.md file",
            Self::License => "LICENSE file",
            Self::GitIgnore => ".gitignore file",
            Self::SourcesFolder => "sources folder",
            Self::TestsFolder => "tests folder",
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Renders a file's text from the project identity.
pub type RenderFn = fn(&ProjectDescriptor) -> String;

/// Where a file's content comes from.
#[derive(Clone, Copy)]
pub enum FileContent {
    /// Serialized through the `ManifestFormat` port.
    Manifest,
    /// Pure text generator.
    Text(RenderFn),
}

impl fmt::Debug for FileContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manifest => f.write_str("Manifest"),
            Self::Text(_) => f.write_str("Text(..)"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum ArtifactKind {
    File(FileContent),
    Folder,
}

/// A named filesystem entry the scaffold ensures exists.
#[derive(Debug)]
pub struct ArtifactSpec {
    pub artifact: Artifact,
    /// Relative to the project folder.
    pub path: &'static str,
    pub kind: ArtifactKind,
}

impl ArtifactSpec {
    /// Absolute location of this artifact under `project_folder`.
    pub fn path_in(&self, project_folder: &Path) -> PathBuf {
        project_folder.join(self.path)
    }

    pub fn is_folder(&self) -> bool {
        matches!(self.kind, ArtifactKind::Folder)
    }

    /// `path` rendered for diagnostics; folders carry a trailing separator.
    pub fn display_in(&self, project_folder: &Path) -> String {
        let path = self.path_in(project_folder);
        if self.is_folder() {
            folder_display(&path)
        } else {
            path.display().to_string()
        }
    }
}

/// Creation order of a scaffold.
pub static ARTIFACTS: [ArtifactSpec; 6] = [
    ArtifactSpec {
        artifact: Artifact::Manifest,
        path: MANIFEST_FILE_NAME,
        kind: ArtifactKind::File(FileContent::Manifest),
    },
    ArtifactSpec {
        artifact: Artifact::Readme,
        path: "README.md",
        kind: ArtifactKind::File(FileContent::Text(templates::readme)),
    },
    ArtifactSpec {
        artifact: Artifact::License,
        path: "LICENSE",
        kind: ArtifactKind::File(FileContent::Text(templates::license)),
    },
    ArtifactSpec {
        artifact: Artifact::GitIgnore,
        path: ".gitignore",
        kind: ArtifactKind::File(FileContent::Text(templates::gitignore)),
    },
    ArtifactSpec {
        artifact: Artifact::SourcesFolder,
        path: "sources",
        kind: ArtifactKind::Folder,
    },
    ArtifactSpec {
        artifact: Artifact::TestsFolder,
        path: "tests",
        kind: ArtifactKind::Folder,
    },
];

/// Display a folder path with exactly one trailing separator.
pub fn folder_display(path: &Path) -> String {
    let mut text = path.display().to_string();
    if !text.ends_with('/') && !text.ends_with(MAIN_SEPARATOR) {
        text.push(MAIN_SEPARATOR);
    }
    text
}
