//! Record formatters
//!
//! A sink renders every record through exactly one [`Formatter`]:
//! - `Text`: aligned human-readable line, optionally colored
//! - `Structured`: pretty-printed JSON document with a fixed field set

pub mod structured;
pub mod text;

pub use structured::{StructuredDocument, StructuredFormatter};
pub use text::{level_label, TextFormatter, LEVEL_WIDTH};

use crate::core::LogRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formatter {
    Text(TextFormatter),
    Structured(StructuredFormatter),
}

impl Formatter {
    pub fn text(use_color: bool) -> Self {
        Formatter::Text(TextFormatter::new(use_color))
    }

    pub fn structured() -> Self {
        Formatter::Structured(StructuredFormatter::new())
    }

    pub fn format(&self, record: &LogRecord) -> String {
        match self {
            Formatter::Text(text) => text.format(record),
            Formatter::Structured(structured) => structured.format(record),
        }
    }

    /// Whether this formatter emits ANSI color codes
    pub fn is_colored(&self) -> bool {
        matches!(self, Formatter::Text(text) if text.use_color())
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Formatter::text(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Severity;

    #[test]
    fn test_dispatch() {
        let record = LogRecord::new(Severity::Info, "svc", "ready");
        assert_eq!(
            Formatter::text(false).format(&record),
            TextFormatter::plain().format(&record)
        );
        assert_eq!(
            Formatter::structured().format(&record),
            StructuredFormatter::new().format(&record)
        );
    }

    #[test]
    fn test_is_colored() {
        assert!(Formatter::text(true).is_colored());
        assert!(!Formatter::text(false).is_colored());
        assert!(!Formatter::structured().is_colored());
    }
}
