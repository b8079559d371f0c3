//! Datetime handling for values stored in SQLite text columns
//!
//! Timestamps are written as `YYYY-MM-DD HH:MM:SS.sss` in UTC, the same shape
//! the schema defaults produce with `strftime('%Y-%m-%d %H:%M:%f', 'now')`.
//! Keeping one shape means text ordering in SQL matches chronological order.
//!
//! # Usage
//!
//! ```rust
//! use catalog_store::utils::datetime::DateTimeParser;
//!
//! let dt = DateTimeParser::parse_flexible("2023-01-01 12:00:00.250").unwrap();
//! assert_eq!(DateTimeParser::format_for_storage(&dt), "2023-01-01 12:00:00.250");
//! ```

use chrono::{DateTime, NaiveDateTime, Utc};
use thiserror::Error;

/// Errors that can occur during datetime operations
#[derive(Error, Debug)]
pub enum DateTimeError {
    /// Invalid datetime format provided
    #[error("Invalid datetime format: '{input}' - expected RFC3339 (2023-01-01T12:00:00Z) or SQLite (2023-01-01 12:00:00.000)")]
    InvalidFormat { input: String },
}

/// Datetime parsing and formatting for the storage layer
pub struct DateTimeParser;

impl DateTimeParser {
    /// Parse datetime from the formats that end up in the database
    ///
    /// Supports:
    /// - RFC3339 with timezone or offset: "2023-01-01T12:00:00Z"
    /// - SQLite format with or without fractional seconds (assumes UTC): "2023-01-01 12:00:00.123"
    /// - ISO without timezone (assumes UTC): "2023-01-01T12:00:00"
    pub fn parse_flexible(datetime_str: &str) -> Result<DateTime<Utc>, DateTimeError> {
        let trimmed = datetime_str.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(dt.with_timezone(&Utc));
        }

        let naive_formats = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

        for format in &naive_formats {
            if let Ok(naive_dt) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Ok(DateTime::from_naive_utc_and_offset(naive_dt, Utc));
            }
        }

        Err(DateTimeError::InvalidFormat {
            input: datetime_str.to_string(),
        })
    }

    /// Format datetime for storage in SQLite with millisecond precision
    pub fn format_for_storage(dt: &DateTime<Utc>) -> String {
        dt.format("%Y-%m-%d %H:%M:%S%.3f").to_string()
    }

    /// Current time rendered for storage
    pub fn now_for_storage() -> String {
        Self::format_for_storage(&Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};

    #[test]
    fn test_parse_rfc3339() {
        let dt = DateTimeParser::parse_flexible("2023-01-01T12:00:00Z").unwrap();
        assert_eq!(dt.year(), 2023);
        assert_eq!(dt.month(), 1);
        assert_eq!(dt.day(), 1);
        assert_eq!(dt.hour(), 12);
    }

    #[test]
    fn test_parse_with_timezone() {
        let dt = DateTimeParser::parse_flexible("2023-01-01T12:00:00+02:00").unwrap();
        assert_eq!(dt.hour(), 10);
    }

    #[test]
    fn test_parse_sqlite_formats() {
        let whole = DateTimeParser::parse_flexible("2023-01-01 12:00:00").unwrap();
        let fractional = DateTimeParser::parse_flexible("2023-01-01 12:00:00.250").unwrap();
        assert_eq!(whole.second(), 0);
        assert_eq!(fractional.timestamp_subsec_millis(), 250);
        assert!(fractional > whole);
    }

    #[test]
    fn test_invalid_format() {
        assert!(DateTimeParser::parse_flexible("not a date").is_err());
        assert!(DateTimeParser::parse_flexible("").is_err());
    }

    #[test]
    fn test_storage_format_keeps_millis_and_sorts_lexically() {
        let earlier = Utc.with_ymd_and_hms(2024, 3, 9, 8, 5, 1).unwrap();
        let later = earlier + chrono::Duration::milliseconds(7);

        let a = DateTimeParser::format_for_storage(&earlier);
        let b = DateTimeParser::format_for_storage(&later);
        assert_eq!(a, "2024-03-09 08:05:01.000");
        assert_eq!(b, "2024-03-09 08:05:01.007");
        assert!(a < b);
        assert_eq!(DateTimeParser::parse_flexible(&b).unwrap(), later);
    }
}
