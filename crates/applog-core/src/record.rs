//! Log records and the shared line format

use chrono::{DateTime, Local};

use crate::level::LogLevel;

/// Line timestamp layout, e.g. `2024-01-01 12:00:00.123`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// One diagnostic event, stamped at the moment of the log call.
///
/// Records are transient: formatted by each sink, never persisted.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: LogLevel,
    pub timestamp: DateTime<Local>,
    pub message: String,
}

impl LogRecord {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            timestamp: Local::now(),
            message: message.into(),
        }
    }

    /// Render `{timestamp} - {LEVEL} - {message}`.
    ///
    /// Both sinks share this line; the console sink decorates it afterwards.
    pub fn format_line(&self) -> String {
        format!(
            "{} - {} - {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.level,
            self.message
        )
    }
}
