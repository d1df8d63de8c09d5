//! Error types for the Exercise Tracker application

use thiserror::Error;

/// Domain validation failures.
///
/// The display text of each variant is the exact message returned to API
/// clients in the `error` field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Username required")]
    UsernameRequired,

    #[error("Description and duration required")]
    ExerciseFieldsRequired,

    #[error("Duration must be a positive whole number of minutes")]
    InvalidDuration,

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}
