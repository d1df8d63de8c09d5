//! Exercise repository for database operations

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Exercise record from database
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ExerciseRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Owner's username at the time the exercise was logged
    pub username: String,
    pub description: String,
    pub duration: i32,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Input for creating an exercise
#[derive(Debug, Clone)]
pub struct CreateExercise {
    pub user_id: Uuid,
    pub username: String,
    pub description: String,
    pub duration: i32,
    pub date: NaiveDate,
}

/// Filter for reading a user's exercise log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFilter {
    pub user_id: Uuid,
    /// Inclusive lower bound
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound
    pub to: Option<NaiveDate>,
    pub limit: Option<i64>,
}

impl LogFilter {
    /// A filter matching every exercise of the user
    pub fn for_user(user_id: Uuid) -> Self {
        Self {
            user_id,
            from: None,
            to: None,
            limit: None,
        }
    }

    /// Whether an exercise falls inside this filter's user and date range
    pub fn matches(&self, exercise: &ExerciseRecord) -> bool {
        exercise.user_id == self.user_id
            && self.from.map_or(true, |from| exercise.date >= from)
            && self.to.map_or(true, |to| exercise.date <= to)
    }
}

/// Exercise repository
pub struct ExerciseRepository;

impl ExerciseRepository {
    /// Create a new exercise
    pub async fn create(pool: &PgPool, input: CreateExercise) -> Result<ExerciseRecord> {
        let record = sqlx::query_as::<_, ExerciseRecord>(
            r#"
            INSERT INTO exercises (user_id, username, description, duration, date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, username, description, duration, date, created_at
            "#,
        )
        .bind(input.user_id)
        .bind(&input.username)
        .bind(&input.description)
        .bind(input.duration)
        .bind(input.date)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Get a user's exercises within an optional date range
    ///
    /// A NULL bound or limit leaves that side unconstrained.
    pub async fn find_by_filter(pool: &PgPool, filter: &LogFilter) -> Result<Vec<ExerciseRecord>> {
        let records = sqlx::query_as::<_, ExerciseRecord>(
            r#"
            SELECT id, user_id, username, description, duration, date, created_at
            FROM exercises
            WHERE user_id = $1
              AND ($2::date IS NULL OR date >= $2)
              AND ($3::date IS NULL OR date <= $3)
            ORDER BY date ASC, created_at ASC
            LIMIT $4
            "#,
        )
        .bind(filter.user_id)
        .bind(filter.from)
        .bind(filter.to)
        .bind(filter.limit)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise_on(user_id: Uuid, date: NaiveDate) -> ExerciseRecord {
        ExerciseRecord {
            id: Uuid::new_v4(),
            user_id,
            username: "fcc".to_string(),
            description: "run".to_string(),
            duration: 30,
            date,
            created_at: Utc::now(),
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_filter_bounds_are_inclusive() {
        let user_id = Uuid::new_v4();
        let filter = LogFilter {
            from: Some(day(10)),
            to: Some(day(20)),
            ..LogFilter::for_user(user_id)
        };

        assert!(!filter.matches(&exercise_on(user_id, day(9))));
        assert!(filter.matches(&exercise_on(user_id, day(10))));
        assert!(filter.matches(&exercise_on(user_id, day(20))));
        assert!(!filter.matches(&exercise_on(user_id, day(21))));
    }

    #[test]
    fn test_filter_requires_owner() {
        let filter = LogFilter::for_user(Uuid::new_v4());
        assert!(!filter.matches(&exercise_on(Uuid::new_v4(), day(1))));
    }
}
