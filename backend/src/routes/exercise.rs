//! Exercise API routes

use super::JsonOrForm;
use crate::error::ApiResult;
use crate::services::{ExerciseLog, ExerciseService, LoggedExercise};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use exercise_tracker_shared::{
    dates, format_log_date, AddExerciseRequest, ExerciseLogQuery, ExerciseLogResponse,
    ExerciseResponse, LogEntryResponse,
};

/// Create exercise routes, nested under `/users`
pub fn exercise_routes() -> Router<AppState> {
    Router::new()
        .route("/:id/exercises", post(add_exercise))
        .route("/:id/logs", get(get_log))
}

/// POST /api/users/:id/exercises - Log an exercise
///
/// The response `id` is the user's id.
async fn add_exercise(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonOrForm(req): JsonOrForm<AddExerciseRequest>,
) -> ApiResult<Json<ExerciseResponse>> {
    let logged = ExerciseService::add_exercise(state.store(), &id, &req, dates::today()).await?;
    Ok(Json(convert_logged_exercise(logged)))
}

/// GET /api/users/:id/logs - Get a user's exercise log
///
/// Supports `from` and `to` (inclusive dates) and `limit`.
async fn get_log(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ExerciseLogQuery>,
) -> ApiResult<Json<ExerciseLogResponse>> {
    let log = ExerciseService::get_log(state.store(), &id, &query).await?;
    Ok(Json(convert_log(log)))
}

fn convert_logged_exercise(logged: LoggedExercise) -> ExerciseResponse {
    ExerciseResponse {
        username: logged.exercise.username,
        description: logged.exercise.description,
        duration: logged.exercise.duration,
        date: format_log_date(logged.exercise.date),
        id: logged.user.id.to_string(),
    }
}

fn convert_log(log: ExerciseLog) -> ExerciseLogResponse {
    let entries: Vec<LogEntryResponse> = log
        .entries
        .into_iter()
        .map(|e| LogEntryResponse {
            description: e.description,
            duration: e.duration,
            date: format_log_date(e.date),
        })
        .collect();

    ExerciseLogResponse {
        username: log.user.username,
        count: entries.len(),
        id: log.user.id.to_string(),
        log: entries,
    }
}
