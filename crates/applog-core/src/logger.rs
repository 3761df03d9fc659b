//! Per-directory logger instances

use std::io;
use std::sync::Arc;

use crate::config::EffectiveConfig;
use crate::handler::{BoxedHandler, ConsoleHandler, FileHandler, Handler};
use crate::level::LogLevel;
use crate::record::LogRecord;

/// Type alias for a shared logger instance
pub type SharedLogger = Arc<Logger>;

/// A logger with its own severity floor and handler set.
///
/// Each instance owns an isolated configuration: building a logger for one
/// directory never reroutes another directory's output.
pub struct Logger {
    name: String,
    level: LogLevel,
    handlers: Vec<BoxedHandler>,
}

impl Logger {
    /// Build the console + file handler pair described by a resolved
    /// configuration.
    ///
    /// Fails when the destination file cannot be opened, so a partially
    /// configured logger never escapes.
    pub fn from_config(name: impl Into<String>, config: &EffectiveConfig) -> io::Result<Self> {
        let console = ConsoleHandler::new(config.console.level, config.console.color);
        let file = FileHandler::new(config.file.level, &config.file.path)?;
        Ok(Self {
            name: name.into(),
            level: config.root_level,
            handlers: vec![Box::new(console), Box::new(file)],
        })
    }

    /// Assemble a logger from pre-built handlers.
    pub fn with_handlers(
        name: impl Into<String>,
        level: LogLevel,
        handlers: Vec<BoxedHandler>,
    ) -> Self {
        Self {
            name: name.into(),
            level,
            handlers,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Stamp a record and dispatch it to every handler whose floor admits it.
    ///
    /// Records below the root floor are dropped before any formatting.
    pub fn log(&self, level: LogLevel, message: &str) {
        if level < self.level {
            return;
        }
        let record = LogRecord::new(level, message);
        for handler in &self.handlers {
            if record.level >= handler.level() {
                handler.emit(&record);
            }
        }
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn warning(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    pub fn critical(&self, message: &str) {
        self.log(LogLevel::Critical, message);
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level)
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

/// Convenience macros for logging with format arguments
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warning(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_critical {
    ($logger:expr, $($arg:tt)*) => {
        $logger.critical(&format!($($arg)*))
    };
}
