//! Log sinks: destinations for formatted records

mod traits;
mod console;
mod file;

pub use traits::{BoxedHandler, Handler};
pub use console::ConsoleHandler;
pub use file::FileHandler;
