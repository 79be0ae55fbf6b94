//! Strict `YYYY-MM-DD` calendar dates.
//!
//! The same parser guards entry validation and feeds the streak calculator,
//! so a date that is rejected on entry is also skipped when read back from
//! an externally edited file.

use chrono::NaiveDate;
use thiserror::Error;

/// Format of solved dates, on entry and on disk.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DateParseError {
    #[error("expected YYYY-MM-DD, got `{0}`")]
    Shape(String),

    #[error("`{0}` is not a calendar date")]
    OutOfRange(String),
}

/// Parse a solved date in strict ISO `YYYY-MM-DD` form.
///
/// Four-digit year, two-digit month and day, no surrounding whitespace.
///
/// # Errors
///
/// Returns `DateParseError::Shape` if the text does not have the expected
/// layout and `DateParseError::OutOfRange` if it names no real day
/// (for example `2024-13-40` or `2023-02-29`).
pub fn parse_solved_date(raw: &str) -> Result<NaiveDate, DateParseError> {
    let bytes = raw.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(DateParseError::Shape(raw.to_owned()));
    }

    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| DateParseError::OutOfRange(raw.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        let date = parse_solved_date("2024-01-05").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    }

    #[test]
    fn accepts_leap_day() {
        assert!(parse_solved_date("2024-02-29").is_ok());
        assert_eq!(
            parse_solved_date("2023-02-29"),
            Err(DateParseError::OutOfRange("2023-02-29".into()))
        );
    }

    #[test]
    fn rejects_impossible_month_and_day() {
        assert_eq!(
            parse_solved_date("2024-13-40"),
            Err(DateParseError::OutOfRange("2024-13-40".into()))
        );
    }

    #[test]
    fn rejects_unpadded_or_padded_text() {
        for raw in ["2024-1-5", " 2024-01-05", "2024-01-05 ", "2024/01/05", "", "yesterday"] {
            assert!(
                matches!(parse_solved_date(raw), Err(DateParseError::Shape(_))),
                "{raw:?} should be rejected"
            );
        }
    }
}
