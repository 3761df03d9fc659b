//! Console handler implementation

use super::traits::Handler;
use crate::color::{decorate, ColorMode};
use crate::level::LogLevel;
use crate::record::LogRecord;

/// Writes formatted lines to stdout, decorated per severity.
#[derive(Debug, Clone)]
pub struct ConsoleHandler {
    level: LogLevel,
    color: ColorMode,
}

impl ConsoleHandler {
    pub fn new(level: LogLevel, color: ColorMode) -> Self {
        if color == ColorMode::Always {
            // colored strips ANSI on non-tty streams unless overridden
            colored::control::set_override(true);
        }
        Self { level, color }
    }

    pub fn color(&self) -> ColorMode {
        self.color
    }
}

impl Handler for ConsoleHandler {
    fn level(&self) -> LogLevel {
        self.level
    }

    fn emit(&self, record: &LogRecord) {
        let line = record.format_line();
        if self.color.enabled() {
            println!("{}", decorate(record.level, &line));
        } else {
            println!("{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_handler_emits_without_panic() {
        let handler = ConsoleHandler::new(LogLevel::Debug, ColorMode::Never);
        assert_eq!(handler.level(), LogLevel::Debug);
        handler.emit(&LogRecord::new(LogLevel::Info, "info message"));
        handler.emit(&LogRecord::new(LogLevel::Critical, "critical message"));
    }
}
