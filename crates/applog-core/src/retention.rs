//! Age-based cleanup of dated log files

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use log::{info, warn};

/// Retention window used by `clean_logs_default`
pub const DEFAULT_RETENTION_DAYS: u64 = 10;

const SECONDS_PER_DAY: u64 = 86_400;

/// Per-file outcomes of one retention sweep
#[derive(Debug, Default)]
pub struct SweepReport {
    /// Files that were deleted
    pub removed: Vec<PathBuf>,
    /// Files whose deletion failed; the sweep continued past each
    pub failed: Vec<(PathBuf, io::Error)>,
}

impl SweepReport {
    /// True when no deletion attempt failed.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Delete `.log` files in `dir` last modified more than `retention_days`
/// days ago.
///
/// Best-effort housekeeping: a missing directory is reported and skipped,
/// and a failed deletion never aborts the rest of the sweep. Subdirectories
/// and files without the `.log` extension are left untouched; there is no
/// recursion.
pub fn clean_logs(dir: &Path, retention_days: u64) -> SweepReport {
    let cutoff = SystemTime::now() - Duration::from_secs(retention_days * SECONDS_PER_DAY);
    clean_logs_before(dir, cutoff)
}

/// `clean_logs` with the default retention window.
pub fn clean_logs_default(dir: &Path) -> SweepReport {
    clean_logs(dir, DEFAULT_RETENTION_DAYS)
}

/// Delete `.log` files in `dir` last modified strictly before `cutoff`.
///
/// A file modified exactly at the cutoff instant is retained.
pub fn clean_logs_before(dir: &Path, cutoff: SystemTime) -> SweepReport {
    let mut report = SweepReport::default();

    if !dir.is_dir() {
        warn!("{} is not a valid directory, skipping log cleanup", dir.display());
        return report;
    }

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            warn!("failed to read {}: {}", dir.display(), err);
            return report;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|ext| ext.to_str()) != Some("log") {
            continue;
        }
        let modified = match entry.metadata().and_then(|meta| meta.modified()) {
            Ok(modified) => modified,
            Err(_) => continue,
        };
        if modified < cutoff {
            match fs::remove_file(&path) {
                Ok(()) => {
                    info!("deleted old log file: {}", path.display());
                    report.removed.push(path);
                }
                Err(err) => {
                    warn!("failed to delete {}: {}", path.display(), err);
                    report.failed.push((path, err));
                }
            }
        }
    }

    report
}
