//! # Rust Color Logger
//!
//! A leveled logging facade: one log call renders an aligned, color-coded line
//! for the terminal and, optionally, plain lines or pretty JSON documents for
//! files.
//!
//! ## Features
//!
//! - **Aligned Output**: fixed-width level column, ANSI colors per severity
//! - **Structured Files**: fixed-schema JSON documents for log ingestion
//! - **Named Handles**: process-wide registry keyed by logger name
//! - **Thread Safe**: lines from concurrent callers never interleave
//!
//! ```no_run
//! use rust_color_logger::{get_logger, Severity};
//! use std::path::Path;
//!
//! let logger = get_logger("svc", Severity::Debug, Some(Path::new("out.log"))).unwrap();
//! logger.add_json_handler("audit.log").unwrap();
//! logger.error("disk full");
//! ```

pub mod core;
pub mod formatters;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        LogRecord, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerFactory,
        LoggerMetrics, Result, Severity, SeverityPalette, Sink,
    };
    pub use crate::formatters::{Formatter, StructuredFormatter, TextFormatter};
    pub use crate::sinks::{ConsoleSink, ConsoleTarget, FileSink, FixedProbe, MemoryBuffer};
}

pub use self::core::{
    add_file_handler, add_json_handler, clear_registry, get_logger, shutdown, LogRecord, Logger,
    LoggerBuilder, LoggerConfig, LoggerError, LoggerFactory, LoggerMetrics, Result, Severity,
    SeverityPalette, Sink,
};
pub use formatters::{Formatter, StructuredFormatter, TextFormatter};
pub use sinks::{ConsoleSink, ConsoleTarget, FileSink};
