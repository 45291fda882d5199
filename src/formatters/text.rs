//! Aligned single-line text rendering

use crate::core::{LogRecord, SeverityPalette};

/// Width of the level column in text output
pub const LEVEL_WIDTH: usize = 8;

/// Renders a record as
/// `<timestamp> - <LEVEL   > - [<name>]: <message> (<file>:<line>)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextFormatter {
    use_color: bool,
}

impl TextFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    /// Formatter for files and pipes
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Formatter for interactive terminals
    pub fn colored() -> Self {
        Self::new(true)
    }

    pub fn use_color(&self) -> bool {
        self.use_color
    }

    pub fn format(&self, record: &LogRecord) -> String {
        Self::render(record, self.use_color)
    }

    /// Render `record` with or without color
    pub fn render(record: &LogRecord, use_color: bool) -> String {
        format!(
            "{} - {} - [{}]: {} ({}:{})",
            record.asctime(),
            level_label(record, use_color),
            record.logger_name,
            record.message,
            record.source_file,
            record.source_line
        )
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::plain()
    }
}

/// Severity name padded to [`LEVEL_WIDTH`]; only the name is colored
pub fn level_label(record: &LogRecord, use_color: bool) -> String {
    let name = record.severity.to_str();
    let padding = " ".repeat(LEVEL_WIDTH.saturating_sub(name.len()));
    if use_color {
        format!(
            "{}{}",
            SeverityPalette::colorize(record.severity.levelno(), name),
            padding
        )
    } else {
        format!("{}{}", name, padding)
    }
}
