//! Shared file-format constants and timestamp helpers used by both binaries.

use chrono::NaiveDateTime;

use crate::error::TickError;

/// Default file written by the generator and read by the plotter.
pub const DEFAULT_FILE_NAME: &str = "random_tick_data.csv";

/// Column names of the tick table, in file order.
pub const CSV_HEADER: [&str; 3] = ["timestamp", "price", "volume"];

/// Format used when writing timestamps (millisecond precision).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Formats accepted when reading timestamps. `%.f` makes the fraction optional.
const TIMESTAMP_PARSE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Render a timestamp the way it is stored in the file.
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a timestamp cell.
///
/// Accepts a space or `T` between date and time, with or without fractional
/// seconds.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, TickError> {
    let trimmed = raw.trim();
    TIMESTAMP_PARSE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| TickError::TimestampParse(format!("unrecognized timestamp '{}'", trimmed)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn formats_with_millisecond_precision() {
        let ts = NaiveDate::from_ymd_opt(2023, 10, 26)
            .and_then(|d| d.and_hms_milli_opt(9, 30, 0, 45))
            .unwrap();
        assert_eq!(format_timestamp(&ts), "2023-10-26 09:30:00.045");
    }

    #[test]
    fn parses_both_separators_and_optional_fraction() {
        let spaced = parse_timestamp("2023-10-26 09:30:00.045").unwrap();
        let iso = parse_timestamp("2023-10-26T09:30:00.045").unwrap();
        let whole = parse_timestamp(" 2023-10-26 09:30:01 ").unwrap();

        assert_eq!(spaced, iso);
        assert_eq!(spaced.nanosecond(), 45_000_000);
        assert_eq!(whole.second(), 1);
        assert_eq!(whole.nanosecond(), 0);
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_timestamp("yesterday").unwrap_err();
        assert!(matches!(err, TickError::TimestampParse(_)));
    }
}
