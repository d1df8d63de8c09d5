//! Database repositories
//!
//! Provides the data access layer. Services depend only on the
//! [`ExerciseStore`] trait; [`PgStore`] backs it with PostgreSQL and
//! [`MemoryStore`] keeps everything in process memory.

pub mod exercise;
pub mod memory;
pub mod postgres;
pub mod user;

pub use exercise::{CreateExercise, ExerciseRecord, ExerciseRepository, LogFilter};
pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use user::{UserRecord, UserRepository};

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Persistence operations needed by the exercise log service.
///
/// Every error is an infrastructure failure; "not found" is `Ok(None)`.
#[async_trait]
pub trait ExerciseStore: Send + Sync {
    /// Insert a user and return the stored record
    async fn create_user(&self, username: &str) -> Result<UserRecord>;

    /// All users in store order
    async fn list_users(&self) -> Result<Vec<UserRecord>>;

    /// Look up a user by id
    async fn find_user(&self, id: Uuid) -> Result<Option<UserRecord>>;

    /// Insert an exercise and return the stored record
    async fn create_exercise(&self, input: CreateExercise) -> Result<ExerciseRecord>;

    /// A user's exercises matching the filter, ascending by date
    async fn find_exercises(&self, filter: &LogFilter) -> Result<Vec<ExerciseRecord>>;

    /// Check that the store is reachable
    async fn health_check(&self) -> Result<()>;
}
