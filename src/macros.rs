//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. The source
//! location written to the record is the macro call site.
//!
//! # Examples
//!
//! ```
//! use rust_color_logger::prelude::*;
//! use rust_color_logger::info;
//!
//! let logger = Logger::new("app");
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use rust_color_logger::prelude::*;
/// # let logger = Logger::new("app");
/// use rust_color_logger::log;
/// log!(logger, Severity::Info, "Simple message");
/// log!(logger, Severity::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log($severity, format!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use rust_color_logger::prelude::*;
/// # let logger = Logger::new("app");
/// use rust_color_logger::debug;
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use rust_color_logger::prelude::*;
/// # let logger = Logger::new("app");
/// use rust_color_logger::warning;
/// warning!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a critical-level message.
///
/// # Examples
///
/// ```
/// # use rust_color_logger::prelude::*;
/// # let logger = Logger::new("app");
/// use rust_color_logger::critical;
/// critical!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Critical, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Logger, Severity};
    use crate::sinks::{ConsoleSink, ConsoleTarget, MemoryBuffer};

    fn logger() -> (Logger, MemoryBuffer) {
        let buffer = MemoryBuffer::new();
        let logger = Logger::builder("macros")
            .sink(ConsoleSink::with_colors(ConsoleTarget::Memory(buffer.clone()), false))
            .build();
        (logger, buffer)
    }

    #[test]
    fn test_level_macros() {
        let (logger, buffer) = logger();
        log!(logger, Severity::Info, "Formatted: {}", 42);
        debug!(logger, "Count: {}", 5);
        info!(logger, "Items: {}", 100);
        warning!(logger, "Retry {} of {}", 1, 3);
        error!(logger, "Code: {}", 500);
        critical!(logger, "Critical failure: {}", "system");

        let lines = buffer.lines();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].contains(" - INFO     - [macros]: Formatted: 42"));
        assert!(lines[1].contains(" - DEBUG    - [macros]: Count: 5"));
        assert!(lines[3].contains(" - WARNING  - [macros]: Retry 1 of 3"));
        assert!(lines[5].contains(" - CRITICAL - [macros]: Critical failure: system"));
    }

    #[test]
    fn test_macro_records_call_site() {
        let (logger, buffer) = logger();
        let line = line!() + 1;
        info!(logger, "where am I");

        let expected = format!("(macros.rs:{})", line);
        assert!(buffer.contents().trim_end().ends_with(&expected));
    }
}
