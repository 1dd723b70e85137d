//! Log Service - the numbered run logs under the data folder.
//!
//! Every run appends to `<data_folder>/logs/<n>.log`, where `n` is the
//! smallest positive number not taken yet. The number is found by probing the
//! folder when the log is opened; nothing is cached between runs.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{application::ports::Filesystem, error::KickoffResult};

/// Name of the log folder inside the data folder.
pub const LOGS_FOLDER: &str = "logs";

/// One persisted run log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub number: u32,
    pub path: PathBuf,
}

pub fn logs_folder(data_folder: &Path) -> PathBuf {
    data_folder.join(LOGS_FOLDER)
}

/// Path of the log file the next run should write.
pub fn next_log_path(filesystem: &dyn Filesystem, data_folder: &Path) -> PathBuf {
    let folder = logs_folder(data_folder);
    let mut number: u32 = 1;
    loop {
        let candidate = folder.join(format!("{number}.log"));
        if !filesystem.exists(&candidate) {
            debug!(path = %candidate.display(), "Next log file");
            return candidate;
        }
        number += 1;
    }
}

/// `<n>.log` with `n >= 1`.
fn log_number(path: &Path) -> Option<u32> {
    let name = path.file_name()?.to_str()?;
    let number: u32 = name.strip_suffix(".log")?.parse().ok()?;
    (number > 0).then_some(number)
}

/// Service for browsing run logs.
pub struct LogService {
    filesystem: Box<dyn Filesystem>,
}

impl LogService {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// All run logs, oldest first. A missing log folder means no logs.
    pub fn list(&self, data_folder: &Path) -> KickoffResult<Vec<LogEntry>> {
        let folder = logs_folder(data_folder);
        if !self.filesystem.exists(&folder) {
            return Ok(Vec::new());
        }

        let mut entries: Vec<LogEntry> = self
            .filesystem
            .read_dir(&folder)?
            .into_iter()
            .filter_map(|path| log_number(&path).map(|number| LogEntry { number, path }))
            .collect();
        entries.sort_by_key(|e| e.number);
        Ok(entries)
    }

    /// The most recent run log, if any.
    pub fn latest(&self, data_folder: &Path) -> KickoffResult<Option<LogEntry>> {
        Ok(self.list(data_folder)?.pop())
    }

    pub fn read(&self, entry: &LogEntry) -> KickoffResult<String> {
        self.filesystem.read_file(&entry.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;

    #[test]
    fn first_log_is_one() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        assert_eq!(
            next_log_path(&fs, Path::new("/data")),
            PathBuf::from("/data/logs/1.log")
        );
    }

    #[test]
    fn skips_taken_numbers() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|p| {
            p == Path::new("/data/logs/1.log") || p == Path::new("/data/logs/2.log")
        });
        assert_eq!(
            next_log_path(&fs, Path::new("/data")),
            PathBuf::from("/data/logs/3.log")
        );
    }

    #[test]
    fn fills_the_smallest_gap() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(|p| p == Path::new("/data/logs/2.log"));
        assert_eq!(
            next_log_path(&fs, Path::new("/data")),
            PathBuf::from("/data/logs/1.log")
        );
    }

    #[test]
    fn list_orders_by_number_and_ignores_strays() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_read_dir()
            .withf(|p| p == Path::new("/data/logs"))
            .returning(|_| {
                Ok(vec![
                    PathBuf::from("/data/logs/10.log"),
                    PathBuf::from("/data/logs/notes.txt"),
                    PathBuf::from("/data/logs/0.log"),
                    PathBuf::from("/data/logs/2.log"),
                ])
            });

        let service = LogService::new(Box::new(fs));
        let numbers: Vec<_> = service
            .list(Path::new("/data"))
            .unwrap()
            .into_iter()
            .map(|e| e.number)
            .collect();
        assert_eq!(numbers, vec![2, 10]);
    }

    #[test]
    fn missing_folder_has_no_logs() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_read_dir().never();

        let service = LogService::new(Box::new(fs));
        assert!(service.list(Path::new("/data")).unwrap().is_empty());
        assert!(service.latest(Path::new("/data")).unwrap().is_none());
    }
}
