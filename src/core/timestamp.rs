//! Timestamp formatting shared by the text and structured formatters

use chrono::{DateTime, Utc};

/// strftime pattern for record timestamps: `2025-01-08 10:30:45 UTC`
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

/// Format a record timestamp with [`DATE_FORMAT`]
///
/// The output is always UTC wall-clock time with a `UTC` zone suffix, never
/// the host's local time or zone abbreviation.
///
/// # Examples
///
/// ```
/// use rust_color_logger::core::timestamp::format_timestamp;
/// use chrono::{TimeZone, Utc};
///
/// let ts = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(format_timestamp(&ts), "2025-01-08 10:30:45 UTC");
/// ```
#[must_use]
pub fn format_timestamp(datetime: &DateTime<Utc>) -> String {
    datetime.format(DATE_FORMAT).to_string()
}
