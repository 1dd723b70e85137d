//! Resolved inputs of a single scaffold run.

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::application::streams::VerboseStream;

/// Everything [`ScaffoldService::run`](crate::application::ScaffoldService::run)
/// needs, fixed before execution starts.
///
/// Only the diagnostic stream can be swapped after construction, through
/// [`RunParameters::with_verbose`].
pub struct RunParameters {
    output: Box<dyn Write + Send>,
    project_folder: PathBuf,
    data_folder: PathBuf,
    verbose: VerboseStream,
}

impl RunParameters {
    /// # Panics
    ///
    /// If `project_folder` or `data_folder` is empty.
    pub fn new(
        output: Box<dyn Write + Send>,
        project_folder: impl Into<PathBuf>,
        data_folder: impl Into<PathBuf>,
    ) -> Self {
        let project_folder = project_folder.into();
        let data_folder = data_folder.into();
        assert!(
            !project_folder.as_os_str().is_empty(),
            "project_folder cannot be empty."
        );
        assert!(
            !data_folder.as_os_str().is_empty(),
            "data_folder cannot be empty."
        );

        Self {
            output,
            project_folder,
            data_folder,
            verbose: VerboseStream::disabled(),
        }
    }

    pub fn with_verbose(mut self, verbose: VerboseStream) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn project_folder(&self) -> &Path {
        &self.project_folder
    }

    /// Folder holding this application's `logs/`.
    pub fn data_folder(&self) -> &Path {
        &self.data_folder
    }

    pub fn verbose(&self) -> &VerboseStream {
        &self.verbose
    }

    pub(crate) fn into_parts(self) -> (Box<dyn Write + Send>, PathBuf, PathBuf, VerboseStream) {
        (self.output, self.project_folder, self.data_folder, self.verbose)
    }
}

impl fmt::Debug for RunParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunParameters")
            .field("project_folder", &self.project_folder)
            .field("data_folder", &self.data_folder)
            .field("verbose", &self.verbose)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn verbose_defaults_to_disabled() {
        let params = RunParameters::new(Box::new(io::sink()), "/project", "/data");
        assert!(!params.verbose().is_enabled());
        assert_eq!(params.project_folder(), Path::new("/project"));
        assert_eq!(params.data_folder(), Path::new("/data"));
    }

    #[test]
    fn with_verbose_replaces_stream() {
        let params = RunParameters::new(Box::new(io::sink()), "/project", "/data")
            .with_verbose(VerboseStream::new(io::sink()));
        assert!(params.verbose().is_enabled());
    }

    #[test]
    #[should_panic(expected = "project_folder cannot be empty.")]
    fn empty_project_folder_panics() {
        let _ = RunParameters::new(Box::new(io::sink()), "", "/data");
    }

    #[test]
    #[should_panic(expected = "data_folder cannot be empty.")]
    fn empty_data_folder_panics() {
        let _ = RunParameters::new(Box::new(io::sink()), "/project", "");
    }
}
