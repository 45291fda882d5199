//! Severity to terminal color mapping

use super::severity::Severity;

/// ANSI reset sequence appended after every colored span
pub const RESET: &str = "\x1b[0m";

/// Maps a severity to an ANSI color transform
///
/// Lookups go through the numeric rank so that levels outside the fixed five
/// fall through to the identity transform instead of failing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeverityPalette;

impl SeverityPalette {
    /// Wrap `text` in the color for `levelno`, or return it unchanged when
    /// the rank is not a known severity
    pub fn colorize(levelno: u8, text: &str) -> String {
        match Severity::from_levelno(levelno) {
            Some(severity) => Self::paint(severity, text),
            None => text.to_string(),
        }
    }

    /// Wrap `text` in the color for `severity`
    pub fn paint(severity: Severity, text: &str) -> String {
        format!(
            "\x1b[{}m{}{}",
            severity.color_code().to_fg_str(),
            text,
            RESET
        )
    }
}

/// Remove ANSI escape sequences from `text`
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // CSI: ESC '[' params final-byte
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
