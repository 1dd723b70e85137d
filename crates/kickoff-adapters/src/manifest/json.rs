//! Pretty JSON rendering of `project.json`.

use kickoff_core::{
    application::{ApplicationError, ports::ManifestFormat},
    domain::ProjectManifest,
    error::KickoffResult,
};
use tracing::instrument;

/// Renders manifests as two-space indented JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonManifestFormat;

impl JsonManifestFormat {
    pub fn new() -> Self {
        Self
    }
}

impl ManifestFormat for JsonManifestFormat {
    #[instrument(skip_all, fields(project = %manifest.project))]
    fn format(&self, manifest: &ProjectManifest) -> KickoffResult<String> {
        serde_json::to_string_pretty(manifest).map_err(|e| {
            ApplicationError::SerializationFailed {
                reason: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_keys_in_declaration_order() {
        let manifest = ProjectManifest {
            project: "folder".into(),
            publisher: "qub".into(),
            version: "1".into(),
        };
        let text = JsonManifestFormat::new().format(&manifest).unwrap();
        assert_eq!(
            text,
            "{\n  \"project\": \"folder\",\n  \"publisher\": \"qub\",\n  \"version\": \"1\"\n}"
        );
    }

    #[test]
    fn escapes_project_names() {
        let manifest = ProjectManifest {
            project: "we\"ird".into(),
            publisher: "qub".into(),
            version: "1".into(),
        };
        let text = JsonManifestFormat::new().format(&manifest).unwrap();
        let parsed: ProjectManifest = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, manifest);
    }
}
