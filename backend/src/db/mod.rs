//! Store construction
//!
//! Builds the [`ExerciseStore`] selected by `database.backend`, owning the
//! PostgreSQL pool and its migrations when that backend is chosen.

use crate::config::{DatabaseConfig, StoreBackend};
use crate::repositories::{ExerciseStore, MemoryStore, PgStore};
use anyhow::{Context, Result};
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Build the store for the configured backend
///
/// For PostgreSQL this connects the pool and, when asked, applies pending
/// migrations before the store is handed out.
pub async fn connect_store(
    config: &DatabaseConfig,
    run_pending_migrations: bool,
) -> Result<Arc<dyn ExerciseStore>> {
    match config.backend {
        StoreBackend::Memory => {
            warn!("Using in-memory store; data will not survive a restart");
            Ok(Arc::new(MemoryStore::new()))
        }
        StoreBackend::Postgres => {
            let pool = create_pool(config).await?;
            if run_pending_migrations {
                run_migrations(&pool).await?;
            }
            Ok(Arc::new(PgStore::new(pool)))
        }
    }
}

/// Open a PostgreSQL pool tuned by `database.pool`
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    let connect_options = PgConnectOptions::from_str(&config.url)
        .context("invalid database url")?
        .application_name("exercise-tracker");
    let tuning = &config.pool;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(tuning.min_connections.min(config.max_connections))
        .acquire_timeout(Duration::from_secs(tuning.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(tuning.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(tuning.max_lifetime_secs))
        .test_before_acquire(true)
        .connect_with(connect_options)
        .await
        .context("failed to connect to database")?;

    info!(
        max = config.max_connections,
        min = tuning.min_connections,
        "Database pool ready"
    );

    Ok(pool)
}

/// Apply the embedded migrations
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("failed to run database migrations")?;
    info!("Database migrations applied");
    Ok(())
}

/// Round-trip a trivial query
pub async fn health_check(pool: &PgPool) -> Result<()> {
    if let Err(e) = sqlx::query("SELECT 1").execute(pool).await {
        warn!(error = %e, "Database health check failed");
        return Err(e.into());
    }
    Ok(())
}
