//! Multiton registry of per-directory loggers

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;
use once_cell::sync::Lazy;
use parking_lot::Mutex;

use crate::config::{self, ConfigError};
use crate::logger::{Logger, SharedLogger};

/// Errors surfaced by `init_logger`
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("filesystem error: {0}")]
    Io(#[from] io::Error),

    #[error("cannot determine the executable directory")]
    NoDefaultDir,
}

pub type InitResult<T> = Result<T, InitError>;

/// Options for `init_logger`
///
/// # Example
///
/// ```no_run
/// use applog_core::{init_logger, InitOptions};
///
/// let logger = init_logger(
///     &InitOptions::new()
///         .with_log_dir("/var/log/myapp")
///         .with_app_name("myapp"),
/// ).unwrap();
/// logger.info("started");
/// ```
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Output directory; `<exe dir>/Logs` when unset
    pub log_dir: Option<PathBuf>,
    /// External config file; the built-in template when unset
    pub config_path: Option<PathBuf>,
    /// Prefix of the dated log file name
    pub app_name: String,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            log_dir: None,
            config_path: None,
            app_name: "myapp".to_string(),
        }
    }
}

impl InitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn with_app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = name.into();
        self
    }
}

/// One logger per distinct output directory.
///
/// The whole check-then-create sequence runs under the registry lock, so
/// concurrent first-time requests for the same directory build exactly one
/// instance. Instances live until the registry is reset or dropped.
#[derive(Debug, Default)]
pub struct LoggerRegistry {
    inner: Mutex<HashMap<PathBuf, SharedLogger>>,
}

impl LoggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached logger for the options' directory, building it on
    /// first use.
    ///
    /// A cache hit performs no I/O: no directory creation, no config
    /// resolution, no handler rebuild. On a miss the directory is created
    /// (idempotent), the dated file name `{app_name}_{YYYY-MM-DD}.log` is
    /// computed, and a logger is built from the resolved configuration.
    /// Nothing is cached when any step fails.
    pub fn get_or_create(&self, options: &InitOptions) -> InitResult<SharedLogger> {
        let dir = match &options.log_dir {
            Some(dir) => dir.clone(),
            None => default_log_dir()?,
        };

        let mut cache = self.inner.lock();
        if let Some(logger) = cache.get(&dir) {
            return Ok(Arc::clone(logger));
        }

        fs::create_dir_all(&dir)?;
        // Two spellings of one directory must share an instance
        let canonical = dir.canonicalize()?;
        if let Some(logger) = cache.get(&canonical) {
            let logger = Arc::clone(logger);
            cache.insert(dir, Arc::clone(&logger));
            return Ok(logger);
        }

        let datestamp = Local::now().format("%Y-%m-%d");
        let log_file = canonical.join(format!("{}_{}.log", options.app_name, datestamp));
        let effective = config::resolve(options.config_path.as_deref(), &log_file)?;
        let logger = Arc::new(Logger::from_config(options.app_name.clone(), &effective)?);

        cache.insert(canonical.clone(), Arc::clone(&logger));
        if dir != canonical {
            cache.insert(dir, Arc::clone(&logger));
        }
        Ok(logger)
    }

    /// Drop every cached instance.
    ///
    /// Loggers still held by callers keep working; the next
    /// `get_or_create` for their directory builds a fresh instance.
    pub fn reset(&self) {
        self.inner.lock().clear();
    }

    /// Number of cached keys, alias spellings included.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

/// Process-wide default registry behind `init_logger`
static REGISTRY: Lazy<LoggerRegistry> = Lazy::new(LoggerRegistry::new);

/// Initialize (or fetch) the logger for a directory using the process-wide
/// registry.
pub fn init_logger(options: &InitOptions) -> InitResult<SharedLogger> {
    REGISTRY.get_or_create(options)
}

/// The `Logs` directory next to the running executable.
pub fn default_log_dir() -> InitResult<PathBuf> {
    let exe = std::env::current_exe()?;
    let dir = exe.parent().ok_or(InitError::NoDefaultDir)?;
    Ok(dir.join("Logs"))
}
