//! User service

use crate::error::ApiError;
use crate::repositories::{ExerciseStore, UserRecord};
use exercise_tracker_shared::validation::validate_username;
use metrics::counter;
use tracing::{debug, info};

const CREATE_USER_FAILED: &str = "Error creating user";
const LIST_USERS_FAILED: &str = "Error fetching users";

/// User service for account operations
pub struct UserService;

impl UserService {
    /// Create a user from a (possibly missing) username
    pub async fn create_user(
        store: &dyn ExerciseStore,
        username: Option<&str>,
    ) -> Result<UserRecord, ApiError> {
        let username = validate_username(username)?;

        let user = store
            .create_user(username)
            .await
            .map_err(ApiError::storage(CREATE_USER_FAILED))?;

        counter!("exercise_tracker_users_created_total").increment(1);
        info!(user_id = %user.id, "User created");

        Ok(user)
    }

    /// List every user
    pub async fn list_users(store: &dyn ExerciseStore) -> Result<Vec<UserRecord>, ApiError> {
        let users = store
            .list_users()
            .await
            .map_err(ApiError::storage(LIST_USERS_FAILED))?;

        debug!(count = users.len(), "Users listed");
        Ok(users)
    }
}
