//! Exercise service
//!
//! Provides business logic for exercise tracking:
//! - Logging an exercise against a user, with date and duration coercion
//! - Reading a user's log with an optional inclusive date range and limit

use super::parse_user_id;
use crate::error::ApiError;
use crate::repositories::{CreateExercise, ExerciseRecord, ExerciseStore, LogFilter, UserRecord};
use chrono::NaiveDate;
use exercise_tracker_shared::validation::{
    parse_date_bound, parse_limit, resolve_exercise_date, validate_exercise_fields,
};
use exercise_tracker_shared::{AddExerciseRequest, ExerciseLogQuery};
use metrics::counter;
use tracing::{debug, info};

const ADD_EXERCISE_FAILED: &str = "Error adding exercise";
const GET_LOG_FAILED: &str = "Error fetching logs";

/// A freshly logged exercise together with its owner
#[derive(Debug, Clone)]
pub struct LoggedExercise {
    pub user: UserRecord,
    pub exercise: ExerciseRecord,
}

/// A user's exercise log, ascending by date
#[derive(Debug, Clone)]
pub struct ExerciseLog {
    pub user: UserRecord,
    pub entries: Vec<ExerciseRecord>,
}

/// Exercise service for business logic
pub struct ExerciseService;

impl ExerciseService {
    /// Log an exercise for a user
    ///
    /// `today` is used when the request carries no date.
    pub async fn add_exercise(
        store: &dyn ExerciseStore,
        user_id: &str,
        request: &AddExerciseRequest,
        today: NaiveDate,
    ) -> Result<LoggedExercise, ApiError> {
        let (description, duration) =
            validate_exercise_fields(request.description.as_deref(), request.duration.as_deref())?;
        let date = resolve_exercise_date(request.date.as_deref(), today)?;

        let user_id = parse_user_id(user_id, ADD_EXERCISE_FAILED)?;
        let user = store
            .find_user(user_id)
            .await
            .map_err(ApiError::storage(ADD_EXERCISE_FAILED))?
            .ok_or_else(ApiError::user_not_found)?;

        let exercise = store
            .create_exercise(CreateExercise {
                user_id: user.id,
                username: user.username.clone(),
                description: description.to_string(),
                duration,
                date,
            })
            .await
            .map_err(ApiError::storage(ADD_EXERCISE_FAILED))?;

        counter!("exercise_tracker_exercises_logged_total").increment(1);
        info!(
            user_id = %user.id,
            exercise_id = %exercise.id,
            duration = exercise.duration,
            date = %exercise.date,
            "Exercise logged"
        );

        Ok(LoggedExercise { user, exercise })
    }

    /// Get a user's exercise log
    pub async fn get_log(
        store: &dyn ExerciseStore,
        user_id: &str,
        query: &ExerciseLogQuery,
    ) -> Result<ExerciseLog, ApiError> {
        let user_id = parse_user_id(user_id, GET_LOG_FAILED)?;
        let user = store
            .find_user(user_id)
            .await
            .map_err(ApiError::storage(GET_LOG_FAILED))?
            .ok_or_else(ApiError::user_not_found)?;

        let filter = Self::build_filter(user.id, query)?;
        let entries = store
            .find_exercises(&filter)
            .await
            .map_err(ApiError::storage(GET_LOG_FAILED))?;

        debug!(
            user_id = %user.id,
            from = ?filter.from,
            to = ?filter.to,
            limit = ?filter.limit,
            count = entries.len(),
            "Exercise log fetched"
        );

        Ok(ExerciseLog { user, entries })
    }

    /// Build the store filter from raw query parameters
    pub fn build_filter(user_id: uuid::Uuid, query: &ExerciseLogQuery) -> Result<LogFilter, ApiError> {
        Ok(LogFilter {
            user_id,
            from: parse_date_bound(query.from.as_deref())?,
            to: parse_date_bound(query.to.as_deref())?,
            limit: parse_limit(query.limit.as_deref()),
        })
    }
}
