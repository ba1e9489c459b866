use crate::error::DateError;
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, Utc};

/// Render an ISO date as `January 15, 2025`.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (taken in UTC), naive
/// `YYYY-MM-DDTHH:MM:SS` datetimes, and the reduced forms `YYYY-MM` and
/// `YYYY`, which mean the first day of the month or year.
pub fn format_date(value: &str) -> Result<String, DateError> {
    let date = parse_date(value).ok_or_else(|| DateError::Invalid(value.to_string()))?;
    Ok(date.format("%B %-d, %Y").to_string())
}

#[must_use]
pub fn current_year() -> i32 {
    Local::now().year()
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    if let Some(date) = parse_reduced(trimmed) {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(timestamp.with_timezone(&Utc).date_naive());
    }
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|datetime| datetime.date())
}

/// `YYYY-MM` or `YYYY`, padded out to a full date.
fn parse_reduced(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    let year_digits = bytes.len() >= 4 && bytes[..4].iter().all(u8::is_ascii_digit);
    let padded = match bytes.len() {
        4 if year_digits => format!("{value}-01-01"),
        7 if year_digits && bytes[4] == b'-' && bytes[5..].iter().all(u8::is_ascii_digit) => {
            format!("{value}-01")
        }
        _ => return None,
    };
    NaiveDate::parse_from_str(&padded, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_plain_dates() {
        assert_eq!(format_date("2025-01-15").unwrap(), "January 15, 2025");
        assert_eq!(format_date("2024-06-01").unwrap(), "June 1, 2024");
        assert_eq!(format_date("2023-12-25").unwrap(), "December 25, 2023");
    }

    #[test]
    fn single_digit_days_are_unpadded() {
        assert_eq!(format_date("2025-03-05").unwrap(), "March 5, 2025");
    }

    #[test]
    fn leap_day() {
        assert_eq!(format_date("2024-02-29").unwrap(), "February 29, 2024");
        assert!(format_date("2023-02-29").is_err());
    }

    #[test]
    fn full_timestamps() {
        assert_eq!(format_date("2025-01-15T12:00:00Z").unwrap(), "January 15, 2025");
        assert_eq!(
            format_date("2025-01-15T23:30:00-05:00").unwrap(),
            "January 16, 2025"
        );
        assert_eq!(format_date("2025-01-15T08:00:00").unwrap(), "January 15, 2025");
    }

    #[test]
    fn reduced_precision_dates() {
        assert_eq!(format_date("2025-01").unwrap(), "January 1, 2025");
        assert_eq!(format_date("2024-11").unwrap(), "November 1, 2024");
        assert_eq!(format_date("2025").unwrap(), "January 1, 2025");
        assert!(format_date("2025-13").is_err());
        assert!(format_date("2025-1").is_err());
        assert!(format_date("202").is_err());
    }

    #[test]
    fn invalid_input_is_named_in_the_error() {
        let err = format_date("invalid-date").unwrap_err();
        assert_eq!(err.to_string(), "Invalid date string: invalid-date");

        let err = format_date("").unwrap_err();
        assert_eq!(err.to_string(), "Invalid date string: ");
    }

    #[test]
    fn current_year_is_plausible() {
        let year = current_year();
        assert!((2020..=2100).contains(&year));
    }
}
