//! Sink implementations

pub mod console;
pub mod file;
pub mod terminal;

pub use console::{ConsoleSink, ConsoleTarget, MemoryBuffer};
pub use file::FileSink;
pub use terminal::{FixedProbe, PlatformProbe, TerminalProbe};

// Re-export trait for convenience
pub use crate::core::Sink;
