//! Log record structure

use super::severity::Severity;
use super::timestamp::format_timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::panic::Location;
use std::path::Path;

/// Snapshot of a single log call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
    pub logger_name: String,
    pub message: String,
    pub source_file: String,
    pub source_line: u32,
}

/// Reduce a source path to its file name
fn base_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
        .to_string()
}

impl LogRecord {
    /// Create a record stamped with the current time and no source location
    pub fn new(severity: Severity, logger_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            severity,
            logger_name: logger_name.into(),
            message: message.into(),
            source_file: String::new(),
            source_line: 0,
        }
    }

    /// Create a record located at the caller of the surrounding `#[track_caller]` chain
    #[track_caller]
    pub fn capture(severity: Severity, logger_name: impl Into<String>, message: impl Into<String>) -> Self {
        let location = Location::caller();
        Self::new(severity, logger_name, message).with_location(location.file(), location.line())
    }

    pub fn with_location(mut self, file: &str, line: u32) -> Self {
        self.source_file = base_name(file);
        self.source_line = line;
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Timestamp rendered as `YYYY-MM-DD HH:MM:SS UTC`, always in UTC
    pub fn asctime(&self) -> String {
        format_timestamp(&self.timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_location_keeps_base_name() {
        let record = LogRecord::new(Severity::Info, "svc", "hello")
            .with_location("src/handlers/upload.rs", 42);
        assert_eq!(record.source_file, "upload.rs");
        assert_eq!(record.source_line, 42);
    }

    #[test]
    fn test_capture_uses_caller_location() {
        let line = line!() + 1;
        let record = LogRecord::capture(Severity::Debug, "svc", "here");
        assert_eq!(record.source_file, "log_record.rs");
        assert_eq!(record.source_line, line);
    }

    #[test]
    fn test_new_has_empty_location() {
        let record = LogRecord::new(Severity::Warning, "", "");
        assert!(record.source_file.is_empty());
        assert_eq!(record.source_line, 0);
        assert!(record.logger_name.is_empty());
    }
}
