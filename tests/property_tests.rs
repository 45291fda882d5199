//! Property-based tests for rust_color_logger using proptest

use proptest::prelude::*;
use rust_color_logger::core::{strip_ansi, RESET};
use rust_color_logger::formatters::{level_label, StructuredDocument, LEVEL_WIDTH};
use rust_color_logger::prelude::*;

fn any_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Debug),
        Just(Severity::Info),
        Just(Severity::Warning),
        Just(Severity::Error),
        Just(Severity::Critical),
    ]
}

fn any_record() -> impl Strategy<Value = LogRecord> {
    (
        any_severity(),
        "[a-z][a-z0-9_.]{0,15}",
        "[^\\x1b]*",
        "[a-z_]{1,12}\\.rs",
        0u32..100_000u32,
    )
        .prop_map(|(severity, name, message, file, line)| {
            LogRecord::new(severity, name, message).with_location(&file, line)
        })
}

// ============================================================================
// Severity Tests
// ============================================================================

proptest! {
    /// Severity string conversions roundtrip
    #[test]
    fn test_severity_str_roundtrip(severity in any_severity()) {
        let parsed: Severity = severity.to_str().parse().unwrap();
        prop_assert_eq!(severity, parsed);
        prop_assert_eq!(format!("{}", severity), severity.to_str());
    }

    /// Ordering agrees with levelno
    #[test]
    fn test_severity_ordering(a in any_severity(), b in any_severity()) {
        prop_assert_eq!(a < b, a.levelno() < b.levelno());
        prop_assert_eq!(a == b, a.levelno() == b.levelno());
    }

    /// Parsing is case-insensitive
    #[test]
    fn test_severity_case_insensitive(severity in any_severity(), lower in any::<bool>()) {
        let input = if lower {
            severity.to_str().to_lowercase()
        } else {
            severity.to_str().to_string()
        };
        prop_assert_eq!(input.parse::<Severity>().unwrap(), severity);
    }
}

// ============================================================================
// Palette Tests
// ============================================================================

proptest! {
    /// Ranks outside the fixed five come back untouched
    #[test]
    fn test_unknown_levelno_is_identity(levelno in any::<u8>(), text in ".*") {
        prop_assume!(Severity::from_levelno(levelno).is_none());
        prop_assert_eq!(SeverityPalette::colorize(levelno, &text), text);
    }

    /// Known ranks wrap the text exactly once
    #[test]
    fn test_known_levelno_wraps_once(severity in any_severity(), text in "[^\\x1b]*") {
        let painted = SeverityPalette::colorize(severity.levelno(), &text);
        prop_assert!(painted.starts_with("\x1b["));
        prop_assert!(painted.ends_with(RESET));
        prop_assert_eq!(painted.matches(RESET).count(), 1);
        prop_assert_eq!(strip_ansi(&painted), text);
    }
}

// ============================================================================
// Text Formatter Tests
// ============================================================================

proptest! {
    /// The level column is always eight characters once color is removed
    #[test]
    fn test_label_width(record in any_record(), use_color in any::<bool>()) {
        let label = strip_ansi(&level_label(&record, use_color));
        prop_assert_eq!(label.len(), LEVEL_WIDTH);
        prop_assert_eq!(label.trim_end(), record.severity.to_str());
    }

    /// Colored and plain lines differ only in escape codes
    #[test]
    fn test_color_only_adds_escapes(record in any_record()) {
        let colored = TextFormatter::render(&record, true);
        let plain = TextFormatter::render(&record, false);
        prop_assert_eq!(strip_ansi(&colored), plain);
    }

    /// Line layout follows the fixed template
    #[test]
    fn test_line_template(record in any_record()) {
        let line = TextFormatter::plain().format(&record);
        let prefix = format!("{} - ", record.asctime());
        let name_part = format!(" - [{}]: ", record.logger_name);
        let suffix = format!(" ({}:{})", record.source_file, record.source_line);
        prop_assert!(line.starts_with(&prefix));
        prop_assert!(line.contains(&name_part));
        prop_assert!(line.ends_with(&suffix));
    }

    /// Formatting the same record twice is byte-identical
    #[test]
    fn test_text_idempotent(record in any_record(), use_color in any::<bool>()) {
        prop_assert_eq!(
            TextFormatter::render(&record, use_color),
            TextFormatter::render(&record, use_color)
        );
    }
}

// ============================================================================
// Structured Formatter Tests
// ============================================================================

proptest! {
    /// Documents parse back to the same seven fields
    #[test]
    fn test_structured_round_trip(record in any_record()) {
        let doc = StructuredFormatter::new().format(&record);
        let parsed: StructuredDocument = serde_json::from_str(&doc).unwrap();
        prop_assert_eq!(&parsed, &StructuredDocument::from(&record));

        let value: serde_json::Value = serde_json::from_str(&doc).unwrap();
        prop_assert_eq!(value.as_object().unwrap().len(), 7);
        prop_assert_eq!(value["levelno"].as_u64(), Some(u64::from(record.severity.levelno())));
        prop_assert_eq!(value["lineno"].as_u64(), Some(u64::from(record.source_line)));
    }

    /// Structured output never carries color codes from the level
    #[test]
    fn test_structured_never_colored(record in any_record()) {
        let doc = StructuredFormatter::new().format(&record);
        let expected = format!("\"levelname\": \"{}\"", record.severity.to_str());
        prop_assert!(doc.contains(&expected));
    }
}

#[test]
fn test_levelno_monotonic() {
    let ranks: Vec<u8> = Severity::ALL.iter().map(|s| s.levelno()).collect();
    assert!(ranks.windows(2).all(|w| w[0] < w[1]));
}
