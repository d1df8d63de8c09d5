//! In-memory store
//!
//! Used by tests and for running the service without a database. Records
//! live only as long as the process.

use super::{CreateExercise, ExerciseRecord, ExerciseStore, LogFilter, UserRecord};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
struct Tables {
    users: Vec<UserRecord>,
    exercises: Vec<ExerciseRecord>,
}

/// [`ExerciseStore`] keeping users and exercises in insertion order
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored exercises across all users
    pub async fn exercise_count(&self) -> usize {
        self.tables.read().await.exercises.len()
    }
}

#[async_trait]
impl ExerciseStore for MemoryStore {
    async fn create_user(&self, username: &str) -> Result<UserRecord> {
        let user = UserRecord {
            id: Uuid::new_v4(),
            username: username.to_string(),
            created_at: Utc::now(),
        };
        self.tables.write().await.users.push(user.clone());
        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>> {
        Ok(self.tables.read().await.users.clone())
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<UserRecord>> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn create_exercise(&self, input: CreateExercise) -> Result<ExerciseRecord> {
        let mut tables = self.tables.write().await;

        if !tables.users.iter().any(|u| u.id == input.user_id) {
            anyhow::bail!("exercise references unknown user {}", input.user_id);
        }

        let record = ExerciseRecord {
            id: Uuid::new_v4(),
            user_id: input.user_id,
            username: input.username,
            description: input.description,
            duration: input.duration,
            date: input.date,
            created_at: Utc::now(),
        };
        tables.exercises.push(record.clone());
        Ok(record)
    }

    async fn find_exercises(&self, filter: &LogFilter) -> Result<Vec<ExerciseRecord>> {
        let tables = self.tables.read().await;

        let mut records: Vec<ExerciseRecord> = tables
            .exercises
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect();

        // Stable sort keeps insertion order among same-day entries
        records.sort_by_key(|e| e.date);

        if let Some(limit) = filter.limit {
            records.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        }

        Ok(records)
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}
