//! Business logic services
//!
//! Services validate input, coordinate store calls and decide which
//! failures are domain errors and which are storage errors.

pub mod exercise;
pub mod user;

pub use exercise::{ExerciseLog, ExerciseService, LoggedExercise};
pub use user::UserService;

use crate::error::ApiError;
use uuid::Uuid;

/// Parse a user id from a path segment.
///
/// Ids are opaque to clients, so a malformed one is treated like any other
/// failed store lookup rather than as a validation error.
pub(crate) fn parse_user_id(id: &str, context: &'static str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id.trim())
        .map_err(|e| ApiError::storage(context)(anyhow::anyhow!("malformed user id {:?}: {}", id, e)))
}
