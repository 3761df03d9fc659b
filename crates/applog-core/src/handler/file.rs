//! File handler implementation

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::traits::Handler;
use crate::level::LogLevel;
use crate::record::LogRecord;

/// Appends plain formatted lines to a log file, flushing on every write.
///
/// The destination is opened in append mode at construction so repeated
/// process runs accumulate into the same dated file.
pub struct FileHandler {
    level: LogLevel,
    path: PathBuf,
    file: Mutex<File>,
}

impl FileHandler {
    /// Open `path` for appending, creating it if absent.
    pub fn new(level: LogLevel, path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            level,
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Handler for FileHandler {
    fn level(&self) -> LogLevel {
        self.level
    }

    fn emit(&self, record: &LogRecord) {
        let mut file = self.file.lock();
        // A full disk must not take the caller's thread down with it
        let _ = writeln!(file, "{}", record.format_line());
        let _ = file.flush();
    }
}

impl std::fmt::Debug for FileHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileHandler")
            .field("level", &self.level)
            .field("path", &self.path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_writes_plain_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");
        let handler = FileHandler::new(LogLevel::Info, &path).unwrap();

        handler.emit(&LogRecord::new(LogLevel::Info, "first"));
        handler.emit(&LogRecord::new(LogLevel::Error, "second"));

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("INFO - first"));
        assert!(lines[1].ends_with("ERROR - second"));
        // No ANSI decoration in file output
        assert!(!content.contains('\x1b'));
    }

    #[test]
    fn test_reopen_appends() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");

        let handler = FileHandler::new(LogLevel::Info, &path).unwrap();
        handler.emit(&LogRecord::new(LogLevel::Info, "first run"));
        drop(handler);

        let handler = FileHandler::new(LogLevel::Info, &path).unwrap();
        handler.emit(&LogRecord::new(LogLevel::Info, "second run"));

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("first run"));
        assert!(content.contains("second run"));
    }

    #[test]
    fn test_open_failure_surfaces() {
        let dir = tempdir().unwrap();
        // The directory itself cannot be opened as a log file
        assert!(FileHandler::new(LogLevel::Info, dir.path()).is_err());
    }
}
