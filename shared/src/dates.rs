//! Calendar date parsing and display
//!
//! Exercise dates are plain calendar dates. Clients may send them as
//! `YYYY-MM-DD`, as an RFC 3339 timestamp (the UTC date is kept), as a local
//! date-time without offset (its date part is kept), or in the same display
//! form the API returns (`Mon Jan 01 2024`).

use crate::errors::ValidationError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Display format used for every date in API responses, e.g. `Mon Jan 01 2024`.
pub const LOG_DATE_FORMAT: &str = "%a %b %d %Y";

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Offset-less date-times, with or without seconds
const LOCAL_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Format a date for API responses.
pub fn format_log_date(date: NaiveDate) -> String {
    date.format(LOG_DATE_FORMAT).to_string()
}

/// Parse a client-supplied calendar date.
pub fn parse_calendar_date(input: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT) {
        return Ok(date);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.with_timezone(&Utc).date_naive());
    }

    if let Some(local) = LOCAL_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
    {
        return Ok(local.date());
    }

    NaiveDate::parse_from_str(trimmed, LOG_DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(trimmed.to_string()))
}

/// Today's date in UTC, used when an exercise is logged without a date.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(2024, 1, 1, "Mon Jan 01 2024")]
    #[case(2024, 1, 15, "Mon Jan 15 2024")]
    #[case(2024, 2, 29, "Thu Feb 29 2024")]
    #[case(1990, 12, 9, "Sun Dec 09 1990")]
    fn test_format_log_date(
        #[case] year: i32,
        #[case] month: u32,
        #[case] day: u32,
        #[case] expected: &str,
    ) {
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        assert_eq!(format_log_date(date), expected);
    }

    #[rstest]
    #[case("2024-01-15")]
    #[case(" 2024-01-15 ")]
    #[case("2024-01-15T08:30:00Z")]
    #[case("2024-01-15T23:30:00+00:00")]
    #[case("2024-01-15T10:00:00")]
    #[case("2024-01-15T23:59:59.250")]
    #[case("2024-01-15T10:00")]
    #[case("2024-01-15 10:00:00")]
    #[case("Mon Jan 15 2024")]
    fn test_parse_supported_formats(#[case] input: &str) {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(parse_calendar_date(input), Ok(expected));
    }

    #[test]
    fn test_rfc3339_uses_utc_date() {
        let parsed = parse_calendar_date("2024-01-15T23:30:00-05:00").unwrap();
        assert_eq!(parsed, NaiveDate::from_ymd_opt(2024, 1, 16).unwrap());
    }

    #[rstest]
    #[case("")]
    #[case("tomorrow")]
    #[case("2024-13-01")]
    #[case("2023-02-29")]
    #[case("Tue Jan 15 2024")]
    #[case("2024-01-15T25:00:00")]
    fn test_parse_rejects_invalid_dates(#[case] input: &str) {
        assert!(matches!(
            parse_calendar_date(input),
            Err(ValidationError::InvalidDate(_))
        ));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Rendered dates always have the fixed `Www Mmm DD YYYY` shape.
        #[test]
        fn prop_display_format_shape(days in 0i64..2_900_000) {
            let date = NaiveDate::from_ymd_opt(1000, 1, 1).unwrap() + chrono::Duration::days(days);
            let rendered = format_log_date(date);
            let parts: Vec<&str> = rendered.split(' ').collect();

            prop_assert_eq!(parts.len(), 4);
            prop_assert_eq!(parts[0].len(), 3);
            prop_assert_eq!(parts[1].len(), 3);
            prop_assert_eq!(parts[2].len(), 2);
            prop_assert_eq!(parts[3].len(), 4);
        }
    }
}
