//! Local filesystem adapter using std::fs.

use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use kickoff_core::{application::ports::Filesystem, error::KickoffResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir(&self, path: &Path) -> KickoffResult<()> {
        fs::create_dir(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn create_dir_all(&self, path: &Path) -> KickoffResult<()> {
        fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> KickoffResult<()> {
        fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_file(&self, path: &Path) -> KickoffResult<String> {
        fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn read_dir(&self, path: &Path) -> KickoffResult<Vec<PathBuf>> {
        let entries = fs::read_dir(path).map_err(|e| map_io_error(path, e, "read directory"))?;
        entries
            .map(|entry| {
                entry
                    .map(|e| e.path())
                    .map_err(|e| map_io_error(path, e, "read directory entry"))
            })
            .collect()
    }

    fn open_append(&self, path: &Path) -> KickoffResult<Box<dyn Write + Send>> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| map_io_error(parent, e, "create directory"))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| map_io_error(path, e, "open file"))?;
        Ok(Box::new(BufWriter::new(file)))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> kickoff_core::error::KickoffError {
    use kickoff_core::application::ApplicationError;

    if e.kind() == io::ErrorKind::AlreadyExists {
        return ApplicationError::AlreadyExists {
            path: path.to_path_buf(),
        }
        .into();
    }

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
