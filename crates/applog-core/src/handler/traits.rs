//! Handler trait definition

use crate::level::LogLevel;
use crate::record::LogRecord;

/// A destination that receives formatted log lines above its severity floor.
///
/// Implementations:
/// - `ConsoleHandler`: decorated lines on stdout
/// - `FileHandler`: plain lines appended to a dated file
///
/// The owning logger performs the floor check before calling `emit`, so an
/// implementation only formats and writes.
pub trait Handler: Send + Sync {
    /// Severity floor; records below it never reach this sink.
    fn level(&self) -> LogLevel;

    /// Write one record.
    fn emit(&self, record: &LogRecord);
}

/// Type alias for a boxed handler
pub type BoxedHandler = Box<dyn Handler>;
