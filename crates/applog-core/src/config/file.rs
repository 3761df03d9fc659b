//! File-based configuration source (TOML)

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::{ConfigError, ConfigResult, ConsoleConfig, EffectiveConfig, FileConfig};
use crate::color::ColorMode;
use crate::level::LogLevel;

/// On-disk configuration file structure.
///
/// Every section is optional and falls back to the built-in template value:
///
/// ```toml
/// [root]
/// level = "DEBUG"
///
/// [console]
/// level = "DEBUG"
/// colors = "auto"
///
/// [file]
/// level = "INFO"
/// ```
///
/// The file handler's destination is never read from the file; it is always
/// injected from the dated path computed at init time.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub root: RootSection,
    #[serde(default)]
    pub console: ConsoleSection,
    #[serde(default)]
    pub file: FileSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RootSection {
    pub level: LogLevel,
}

impl Default for RootSection {
    fn default() -> Self {
        Self {
            level: LogLevel::Debug,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleSection {
    pub level: LogLevel,
    pub colors: ColorMode,
}

impl Default for ConsoleSection {
    fn default() -> Self {
        Self {
            level: LogLevel::Debug,
            colors: ColorMode::Auto,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileSection {
    pub level: LogLevel,
}

impl Default for FileSection {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
        }
    }
}

impl ConfigFile {
    /// Parse `path` as TOML.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Bind the parsed sections to a concrete destination file.
    pub(crate) fn into_effective(self, log_file: &Path) -> EffectiveConfig {
        EffectiveConfig {
            root_level: self.root.level,
            console: ConsoleConfig {
                level: self.console.level,
                color: self.console.colors,
            },
            file: FileConfig {
                level: self.file.level,
                path: log_file.to_path_buf(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_full_file_parses() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logging.toml");
        fs::write(
            &path,
            r#"
[root]
level = "INFO"

[console]
level = "WARNING"
colors = "never"

[file]
level = "ERROR"
"#,
        )
        .unwrap();

        let config = ConfigFile::load(&path).unwrap();
        assert_eq!(config.root.level, LogLevel::Info);
        assert_eq!(config.console.level, LogLevel::Warning);
        assert_eq!(config.console.colors, ColorMode::Never);
        assert_eq!(config.file.level, LogLevel::Error);
    }

    #[test]
    fn test_missing_sections_use_template_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logging.toml");
        fs::write(&path, "[console]\ncolors = \"always\"\n").unwrap();

        let config = ConfigFile::load(&path).unwrap();
        assert_eq!(config.root.level, LogLevel::Debug);
        assert_eq!(config.console.level, LogLevel::Debug);
        assert_eq!(config.console.colors, ColorMode::Always);
        assert_eq!(config.file.level, LogLevel::Info);
    }

    #[test]
    fn test_unknown_section_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logging.toml");
        fs::write(&path, "[syslog]\nlevel = \"INFO\"\n").unwrap();
        assert!(ConfigFile::load(&path).is_err());
    }
}
