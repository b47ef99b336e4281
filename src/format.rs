//! Value formatting and parsing under a caller-supplied strftime pattern.
//!
//! Formatting is permissive and parsing is strict: a malformed pattern renders
//! as [`INVALID_DATE`] instead of panicking, while text only parses when it
//! matches the pattern exactly and does not denote the zero instant.

use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Pattern used when the caller supplies none.
pub const DEFAULT_FORMAT: &str = "%Y-%m-%d";

/// Rendered in place of a value when the format pattern is malformed.
pub const INVALID_DATE: &str = "Invalid Date";

/// Formats `value` under `pattern`, yielding [`INVALID_DATE`] when the pattern
/// itself does not scan.
///
/// ```
/// use chrono::NaiveDate;
/// use tessera_datetime_picker::format::format_value;
///
/// let value = NaiveDate::from_ymd_opt(2024, 1, 15)
///     .unwrap()
///     .and_hms_opt(14, 30, 0)
///     .unwrap();
/// assert_eq!(format_value(value, "%Y-%m-%d %H:%M"), "2024-01-15 14:30");
/// assert_eq!(format_value(value, "%Q"), "Invalid Date");
/// ```
pub fn format_value(value: NaiveDateTime, pattern: &str) -> String {
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return INVALID_DATE.to_string();
    }
    value.format_with_items(items.into_iter()).to_string()
}

/// Parses `text` under `pattern`, falling back to a date-only parse with the
/// time defaulted to midnight. Text that denotes the zero instant
/// (1970-01-01 00:00:00) is rejected as not-a-value.
pub fn parse_value(text: &str, pattern: &str) -> Option<NaiveDateTime> {
    let parsed = NaiveDateTime::parse_from_str(text, pattern)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(text, pattern)
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })?;
    if parsed.and_utc().timestamp_millis() == 0 {
        return None;
    }
    Some(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_datetime() {
        let parsed = parse_value("2024-01-15 14:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
        assert_eq!(format_value(parsed, "%Y-%m-%d %H:%M:%S"), "2024-01-15 14:30:00");
    }

    #[test]
    fn test_parse_date_only_defaults_to_midnight() {
        let parsed = parse_value("2024-01-15", DEFAULT_FORMAT).unwrap();
        assert_eq!(format_value(parsed, "%Y-%m-%d %H:%M:%S"), "2024-01-15 00:00:00");
    }

    #[test]
    fn test_parse_rejects_impossible_date() {
        assert_eq!(parse_value("2024-13-01", DEFAULT_FORMAT), None);
        assert_eq!(parse_value("2024-02-30", DEFAULT_FORMAT), None);
    }

    #[test]
    fn test_parse_rejects_empty_and_mismatched_text() {
        assert_eq!(parse_value("", DEFAULT_FORMAT), None);
        assert_eq!(parse_value("15/01/2024", DEFAULT_FORMAT), None);
    }

    #[test]
    fn test_parse_rejects_zero_instant() {
        assert_eq!(parse_value("1970-01-01", DEFAULT_FORMAT), None);
        assert!(parse_value("1970-01-02", DEFAULT_FORMAT).is_some());
    }

    #[test]
    fn test_format_bad_pattern_yields_invalid_date() {
        let value = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(format_value(value, "%Q"), INVALID_DATE);
    }
}
