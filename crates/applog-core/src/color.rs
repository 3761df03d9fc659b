//! Console color decoration

use std::io::IsTerminal;
use std::str::FromStr;

use colored::Colorize;
use serde::Deserialize;

use crate::level::LogLevel;

/// Whether the console sink decorates its output.
///
/// `Auto` probes stdout once per write, so redirected output stays plain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve the mode against the current stdout.
    pub fn enabled(&self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}

/// Error returned when a color mode name is not recognized
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown color mode: {0}")]
pub struct ParseColorModeError(String);

impl FromStr for ColorMode {
    type Err = ParseColorModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            _ => Err(ParseColorModeError(s.to_string())),
        }
    }
}

impl TryFrom<String> for ColorMode {
    type Error = ParseColorModeError;

    fn try_from(s: String) -> Result<Self, ParseColorModeError> {
        s.parse()
    }
}

/// Wrap a fully formatted line in the level's color, ending with a reset.
///
/// Only the console sink calls this; file output is always plain.
pub fn decorate(level: LogLevel, line: &str) -> String {
    match level {
        LogLevel::Debug => line.bright_blue(),
        LogLevel::Info => line.bright_green(),
        LogLevel::Warning => line.bright_yellow(),
        LogLevel::Error => line.bright_red(),
        LogLevel::Critical => line.bright_magenta(),
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decorate_wraps_whole_line() {
        // colored strips ANSI for non-tty streams unless overridden
        colored::control::set_override(true);

        let line = "2024-01-01 12:00:00.000 - INFO - hello";
        let decorated = decorate(LogLevel::Info, line);
        assert!(decorated.starts_with("\x1b["));
        assert!(decorated.ends_with("\x1b[0m"));
        assert!(decorated.contains(line));

        // Distinct levels get distinct start markers
        let error = decorate(LogLevel::Error, line);
        assert_ne!(decorated, error);

        colored::control::unset_override();
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("auto".parse::<ColorMode>().unwrap(), ColorMode::Auto);
        assert_eq!("Always".parse::<ColorMode>().unwrap(), ColorMode::Always);
        assert_eq!("never".parse::<ColorMode>().unwrap(), ColorMode::Never);
        assert!("sometimes".parse::<ColorMode>().is_err());
    }

    #[test]
    fn test_mode_resolution() {
        assert!(ColorMode::Always.enabled());
        assert!(!ColorMode::Never.enabled());
    }
}
