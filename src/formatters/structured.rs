//! Fixed-schema JSON rendering for file ingestion

use crate::core::LogRecord;
use serde::{Deserialize, Serialize};

/// Document written for every record; field order is the wire order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredDocument {
    pub asctime: String,
    pub levelname: String,
    pub levelno: u8,
    pub name: String,
    pub message: String,
    pub filename: String,
    pub lineno: u32,
}

impl From<&LogRecord> for StructuredDocument {
    fn from(record: &LogRecord) -> Self {
        Self {
            asctime: record.asctime(),
            levelname: record.severity.to_str().to_string(),
            levelno: record.severity.levelno(),
            name: record.logger_name.clone(),
            message: record.message.clone(),
            filename: record.source_file.clone(),
            lineno: record.source_line,
        }
    }
}

/// Renders a record as a pretty-printed (2-space indented) JSON object
///
/// Structured output is never colorized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StructuredFormatter;

impl StructuredFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Pretty JSON for `record`
    ///
    /// A serialization failure is reported on stderr and yields an empty string.
    pub fn format(&self, record: &LogRecord) -> String {
        match serde_json::to_string_pretty(&StructuredDocument::from(record)) {
            Ok(doc) => doc,
            Err(e) => {
                eprintln!(
                    "[LOGGER ERROR] Failed to serialize record from '{}': {}",
                    record.logger_name, e
                );
                String::new()
            }
        }
    }
}
