//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    io::{self, Write},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use kickoff_core::{
    application::{ApplicationError, ports::Filesystem},
    error::KickoffResult,
};

/// In-memory filesystem for testing.
///
/// Clones share the same contents, so a test can keep a handle while the
/// service under test owns another.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn contains(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.directories.contains(path)
    }

    fn insert_dir_all(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }

    fn parent_exists(&self, path: &Path) -> bool {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => self.directories.contains(parent),
            _ => true,
        }
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Read a file's content (testing helper).
    pub fn read(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// `true` if `path` is a directory.
    pub fn is_dir(&self, path: impl AsRef<Path>) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path.as_ref()))
            .unwrap_or(false)
    }

    /// Every file and directory strictly below `root`, sorted.
    pub fn entries_under(&self, root: impl AsRef<Path>) -> Vec<PathBuf> {
        let root = root.as_ref();
        let Ok(inner) = self.inner.read() else {
            return Vec::new();
        };
        let mut entries: Vec<PathBuf> = inner
            .directories
            .iter()
            .chain(inner.files.keys())
            .filter(|p| p.starts_with(root) && p.as_path() != root)
            .cloned()
            .collect();
        entries.sort();
        entries
    }

    fn write_inner(&self) -> KickoffResult<std::sync::RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError.into())
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.contains(path))
            .unwrap_or(false)
    }

    fn create_dir(&self, path: &Path) -> KickoffResult<()> {
        let mut inner = self.write_inner()?;

        if inner.contains(path) {
            return Err(ApplicationError::AlreadyExists {
                path: path.to_path_buf(),
            }
            .into());
        }
        if !inner.parent_exists(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Parent directory does not exist".into(),
            }
            .into());
        }

        inner.directories.insert(path.to_path_buf());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> KickoffResult<()> {
        let mut inner = self.write_inner()?;

        if inner.files.contains_key(path) {
            return Err(ApplicationError::AlreadyExists {
                path: path.to_path_buf(),
            }
            .into());
        }

        inner.insert_dir_all(path);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> KickoffResult<()> {
        let mut inner = self.write_inner()?;

        // Ensure parent exists
        if !inner.parent_exists(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Parent directory does not exist".into(),
            }
            .into());
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_file(&self, path: &Path) -> KickoffResult<String> {
        self.read(path).ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "File does not exist".into(),
            }
            .into()
        })
    }

    fn read_dir(&self, path: &Path) -> KickoffResult<Vec<PathBuf>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if !inner.directories.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Directory does not exist".into(),
            }
            .into());
        }

        Ok(inner
            .directories
            .iter()
            .chain(inner.files.keys())
            .filter(|p| p.parent() == Some(path))
            .cloned()
            .collect())
    }

    fn open_append(&self, path: &Path) -> KickoffResult<Box<dyn Write + Send>> {
        let mut inner = self.write_inner()?;

        if let Some(parent) = path.parent() {
            inner.insert_dir_all(parent);
        }
        inner.files.entry(path.to_path_buf()).or_default();

        Ok(Box::new(MemoryFileWriter {
            inner: Arc::clone(&self.inner),
            path: path.to_path_buf(),
            pending: Vec::new(),
        }))
    }
}

/// Append handle into a [`MemoryFilesystem`] file.
///
/// Writes become visible on flush or drop, like a buffered file.
struct MemoryFileWriter {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
    path: PathBuf,
    pending: Vec<u8>,
}

impl Write for MemoryFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let mut inner = self
            .inner
            .write()
            .map_err(|_| io::Error::other("memory filesystem lock poisoned"))?;
        let text = String::from_utf8_lossy(&self.pending);
        inner
            .files
            .entry(self.path.clone())
            .or_default()
            .push_str(&text);
        self.pending.clear();
        Ok(())
    }
}

impl Drop for MemoryFileWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
