//! Scaffold Service - main application orchestrator.
//!
//! This service runs the idempotent scaffold procedure:
//! 1. Name the project after its folder, failing before any side effect
//! 2. Open the run's log file
//! 3. Ensure the project folder exists
//! 4. Stop if a manifest is already there
//! 5. Create each missing artifact in table order
//!
//! Diagnostics go to the verbosity-gated stream and the log file, the
//! one-line summary goes to the output stream.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    application::{
        parameters::RunParameters,
        ports::{Filesystem, ManifestFormat},
        services::log_service,
        streams::LogStreams,
    },
    domain::{
        ARTIFACTS, Artifact, ArtifactKind, ArtifactSpec, FileContent, MANIFEST_FILE_NAME, ProjectDescriptor,
        ScaffoldOutcome, folder_display,
    },
    error::KickoffResult,
};

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    manifest_format: Box<dyn ManifestFormat>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use kickoff_core::application::{ScaffoldService, ports::*};
    ///
    /// let service = ScaffoldService::new(
    ///     filesystem,      // impl Filesystem
    ///     manifest_format, // impl ManifestFormat
    /// );
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>, manifest_format: Box<dyn ManifestFormat>) -> Self {
        Self {
            filesystem,
            manifest_format,
        }
    }

    /// Scaffold a project into `parameters.project_folder()`.
    ///
    /// Existing entries are never overwritten. The log file opened for this
    /// run is closed before this returns, on success and on error.
    #[instrument(
        skip_all,
        fields(project_folder = %parameters.project_folder().display())
    )]
    pub fn run(&self, parameters: RunParameters) -> KickoffResult<ScaffoldOutcome> {
        let (output, project_folder, data_folder, verbose) = parameters.into_parts();
        let descriptor = ProjectDescriptor::for_folder(&project_folder)?;

        let log_path = log_service::next_log_path(self.filesystem.as_ref(), &data_folder);
        let log_writer = self.filesystem.open_append(&log_path)?;
        let mut streams = LogStreams::new(output, verbose, log_path, log_writer);

        let outcome = self.scaffold(&project_folder, &descriptor, &mut streams)?;

        let log_path = streams.finish()?;
        info!(
            exit_code = outcome.exit_code(),
            created = outcome.created.len(),
            skipped = outcome.skipped.len(),
            log = %log_path.display(),
            "Scaffold run finished"
        );
        Ok(outcome)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn scaffold(
        &self,
        project_folder: &Path,
        descriptor: &ProjectDescriptor,
        streams: &mut LogStreams,
    ) -> KickoffResult<ScaffoldOutcome> {
        let folder = folder_display(project_folder);

        self.ensure_project_folder(project_folder, &folder, streams)?;

        let manifest_path = project_folder.join(MANIFEST_FILE_NAME);
        if self.filesystem.exists(&manifest_path) {
            streams.write_verbose_line(&format!(
                "{} ({}) already exists.",
                Artifact::Manifest,
                manifest_path.display()
            ))?;
            streams.write_output_line(&format!("A project already exists in folder {folder}."))?;
            info!("Manifest found, leaving project untouched");
            return Ok(ScaffoldOutcome::already_initialized());
        }

        streams.write_output(&format!("Creating project in folder {folder}..."))?;
        streams.write_verbose_line("")?;

        let mut outcome = ScaffoldOutcome::created();

        for spec in &ARTIFACTS {
            let path = spec.path_in(project_folder);
            let shown = spec.display_in(project_folder);

            if self.filesystem.exists(&path) {
                debug!(artifact = %spec.artifact, "Already present");
                streams.write_verbose_line(&format!("{} ({shown}) already exists.", spec.artifact))?;
                outcome.skipped.push(spec.artifact);
                continue;
            }

            streams.write_verbose(&format!("Creating {} ({shown})...", spec.artifact))?;
            self.materialize(spec, &path, descriptor)?;
            streams.write_verbose_line(" Done.")?;
            debug!(artifact = %spec.artifact, "Created");
            outcome.created.push(spec.artifact);
        }

        streams.write_output_line(" Done.")?;
        Ok(outcome)
    }

    fn ensure_project_folder(
        &self,
        project_folder: &Path,
        folder: &str,
        streams: &mut LogStreams,
    ) -> KickoffResult<()> {
        streams.write_verbose(&format!(
            "Checking if project folder ({folder}) already exists..."
        ))?;
        let exists = self.filesystem.exists(project_folder);
        streams.write_verbose_line(" Done.")?;

        if exists {
            streams.write_verbose_line(&format!("Project folder ({folder}) already exists."))?;
        } else {
            streams.write_verbose(&format!(
                "Project folder ({folder}) doesn't exist. Creating it now..."
            ))?;
            tolerate_existing(self.filesystem.create_dir_all(project_folder))?;
            streams.write_verbose_line(" Done.")?;
        }
        Ok(())
    }

    fn materialize(
        &self,
        spec: &ArtifactSpec,
        path: &Path,
        descriptor: &ProjectDescriptor,
    ) -> KickoffResult<()> {
        match spec.kind {
            ArtifactKind::Folder => tolerate_existing(self.filesystem.create_dir(path)),
            ArtifactKind::File(FileContent::Manifest) => {
                let text = self.manifest_format.format(&descriptor.manifest())?;
                self.filesystem.write_file(path, &text)
            }
            ArtifactKind::File(FileContent::Text(render)) => {
                self.filesystem.write_file(path, &render(descriptor))
            }
        }
    }
}

/// Folder creation that lost a race to someone else still leaves the folder
/// in place.
fn tolerate_existing(result: KickoffResult<()>) -> KickoffResult<()> {
    match result {
        Err(e) if e.is_already_exists() => {
            debug!(error = %e, "Folder appeared concurrently");
            Ok(())
        }
        other => other,
    }
}
