//! PostgreSQL-backed store

use super::{
    CreateExercise, ExerciseRecord, ExerciseRepository, ExerciseStore, LogFilter, UserRecord,
    UserRepository,
};
use crate::db;
use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

/// [`ExerciseStore`] over a PostgreSQL connection pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the database pool
    #[inline]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ExerciseStore for PgStore {
    async fn create_user(&self, username: &str) -> Result<UserRecord> {
        UserRepository::create(&self.pool, username).await
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>> {
        UserRepository::list(&self.pool).await
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<UserRecord>> {
        UserRepository::find_by_id(&self.pool, id).await
    }

    async fn create_exercise(&self, input: CreateExercise) -> Result<ExerciseRecord> {
        ExerciseRepository::create(&self.pool, input).await
    }

    async fn find_exercises(&self, filter: &LogFilter) -> Result<Vec<ExerciseRecord>> {
        ExerciseRepository::find_by_filter(&self.pool, filter).await
    }

    async fn health_check(&self) -> Result<()> {
        db::health_check(&self.pool).await
    }
}
