//! Calendar time parsing and formatting
//!
//! NASA's close-approach catalog publishes calendar dates like
//! `1910-May-20 12:49` (UTC, minute precision). Display and serialization
//! use the numeric `1910-05-20 12:49` form, without seconds since the source
//! data carries none.

use chrono::NaiveDateTime;

/// Calendar format of the `cd` field in the close-approach catalog.
pub const CD_TIME_FORMAT: &str = "%Y-%b-%d %H:%M";

/// Canonical minute-precision format used for display, CSV, and JSON.
pub const OUTPUT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parse a calendar string into a timestamp.
///
/// Accepts the catalog's `cd` form (`2020-Jan-01 00:00`) as well as the
/// canonical output form (`2020-01-01 00:00`), so serialized times parse
/// back. Returns `None` for anything else, including the empty string.
pub fn parse_approach_time(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, CD_TIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, OUTPUT_TIME_FORMAT))
        .ok()
}

/// Format a timestamp at minute precision; `None` renders as the empty
/// string.
pub fn format_approach_time(time: Option<NaiveDateTime>) -> String {
    match time {
        Some(t) => t.format(OUTPUT_TIME_FORMAT).to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cd_format() {
        let t = parse_approach_time("1910-May-20 12:49").unwrap();
        assert_eq!(format_approach_time(Some(t)), "1910-05-20 12:49");
    }

    #[test]
    fn test_parse_output_format() {
        let t = parse_approach_time("2020-01-01 00:00").unwrap();
        assert_eq!(format_approach_time(Some(t)), "2020-01-01 00:00");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_approach_time(""), None);
        assert_eq!(parse_approach_time("soon"), None);
        assert_eq!(parse_approach_time("2020-13-40 99:99"), None);
    }

    #[test]
    fn test_format_none_is_empty() {
        assert_eq!(format_approach_time(None), "");
    }
}
