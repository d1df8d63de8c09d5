//! Input validation functions
//!
//! These helpers turn the loosely typed request fields into the values the
//! service stores, returning a [`ValidationError`] whose message is sent back
//! to the client unchanged.

use crate::dates::parse_calendar_date;
use crate::errors::ValidationError;
use chrono::NaiveDate;

/// Return the trimmed text, or `None` when missing or blank.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Validate a username for user creation
pub fn validate_username(username: Option<&str>) -> Result<&str, ValidationError> {
    non_blank(username).ok_or(ValidationError::UsernameRequired)
}

/// Validate the required exercise fields, returning `(description, duration)`.
pub fn validate_exercise_fields<'a>(
    description: Option<&'a str>,
    duration: Option<&'a str>,
) -> Result<(&'a str, i32), ValidationError> {
    match (non_blank(description), non_blank(duration)) {
        (Some(description), Some(duration)) => {
            Ok((description, parse_duration_minutes(duration)?))
        }
        _ => Err(ValidationError::ExerciseFieldsRequired),
    }
}

/// Coerce a duration into whole minutes.
///
/// Accepts any numeric text (`"30"`, `"30.0"`, `"3e1"`) whose value is a
/// positive integer that fits in an `i32`.
pub fn parse_duration_minutes(input: &str) -> Result<i32, ValidationError> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidDuration)?;

    if !value.is_finite() || value.fract() != 0.0 || value < 1.0 || value > f64::from(i32::MAX) {
        return Err(ValidationError::InvalidDuration);
    }

    Ok(value as i32)
}

/// Resolve the date of a new exercise, falling back to `default` when absent.
pub fn resolve_exercise_date(
    input: Option<&str>,
    default: NaiveDate,
) -> Result<NaiveDate, ValidationError> {
    match non_blank(input) {
        Some(date) => parse_calendar_date(date),
        None => Ok(default),
    }
}

/// Parse an optional date bound of a log query.
pub fn parse_date_bound(input: Option<&str>) -> Result<Option<NaiveDate>, ValidationError> {
    non_blank(input).map(parse_calendar_date).transpose()
}

/// Parse a log limit. Anything other than a positive integer means "no limit".
pub fn parse_limit(input: Option<&str>) -> Option<i64> {
    non_blank(input)
        .and_then(|limit| limit.parse::<i64>().ok())
        .filter(|limit| *limit > 0)
}
