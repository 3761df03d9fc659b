//! Effective logging configuration and its two sources
//!
//! A configuration is resolved fresh per `init` call, either from an external
//! TOML file or from the built-in default template, with the computed log
//! file path injected in both cases. Once a logger is built from it, the
//! configuration is never mutated again.

mod file;

pub use file::{ConfigFile, ConsoleSection, FileSection, RootSection};

use std::path::{Path, PathBuf};

use crate::color::ColorMode;
use crate::level::LogLevel;

/// Errors that can occur while resolving a logging configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An explicitly supplied config path does not denote a regular file.
    /// Only an unset path falls back to the built-in template.
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Console handler settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub level: LogLevel,
    pub color: ColorMode,
}

/// File handler settings; `path` is injected at resolve time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileConfig {
    pub level: LogLevel,
    pub path: PathBuf,
}

/// A fully resolved configuration: root floor plus one console and one file
/// handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub root_level: LogLevel,
    pub console: ConsoleConfig,
    pub file: FileConfig,
}

impl EffectiveConfig {
    /// Built-in default template: DEBUG colorized console, INFO plain file,
    /// DEBUG root floor.
    pub fn default_template(log_file: impl Into<PathBuf>) -> Self {
        Self {
            root_level: LogLevel::Debug,
            console: ConsoleConfig {
                level: LogLevel::Debug,
                color: ColorMode::Auto,
            },
            file: FileConfig {
                level: LogLevel::Info,
                path: log_file.into(),
            },
        }
    }
}

/// Resolve the effective configuration for one computed log file path.
///
/// `None` falls back to the built-in template. `Some(path)` must denote an
/// existing regular file; a missing file is an error rather than a silent
/// fallback, and a malformed one aborts the init call.
pub fn resolve(config_path: Option<&Path>, log_file: &Path) -> ConfigResult<EffectiveConfig> {
    match config_path {
        None => Ok(EffectiveConfig::default_template(log_file)),
        Some(path) => {
            if !path.is_file() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Ok(ConfigFile::load(path)?.into_effective(log_file))
        }
    }
}
