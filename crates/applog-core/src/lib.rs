//! Applog Core
//!
//! Directory-keyed logger setup: each output directory gets one logger with
//! a colored console sink and a plain-text file sink named
//! `{app_name}_{YYYY-MM-DD}.log`. Instances are cached in a process-wide
//! registry, and a retention sweep deletes dated files past their window.
//!
//! ```rust,ignore
//! use applog_core::{clean_logs, init_logger, InitOptions};
//!
//! let logger = init_logger(&InitOptions::new().with_log_dir("/var/log/myapp"))?;
//! logger.info("service started");
//!
//! // Housekeeping, typically on startup
//! clean_logs("/var/log/myapp".as_ref(), 10);
//! ```

pub mod color;
pub mod config;
pub mod handler;
pub mod level;
pub mod logger;
pub mod record;
pub mod registry;
pub mod retention;

// Re-export commonly used types
pub use color::{decorate, ColorMode};
pub use config::{ConfigError, ConfigFile, ConfigResult, EffectiveConfig};
pub use handler::{ConsoleHandler, FileHandler, Handler};
pub use level::LogLevel;
pub use logger::{Logger, SharedLogger};
pub use record::LogRecord;
pub use registry::{
    default_log_dir, init_logger, InitError, InitOptions, InitResult, LoggerRegistry,
};
pub use retention::{
    clean_logs, clean_logs_before, clean_logs_default, SweepReport, DEFAULT_RETENTION_DAYS,
};
