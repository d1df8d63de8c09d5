//! Exercise Tracker Backend
//!
//! A small REST service for tracking users and their logged exercises.
//!
//! ## Architecture
//!
//! The backend follows a layered architecture:
//! - Routes: HTTP request handling and routing
//! - Services: Validation and business logic
//! - Repositories: Data access behind the `ExerciseStore` trait
//! - Database: PostgreSQL with SQLx, or an in-memory store

use anyhow::Result;
use exercise_tracker_backend::{config, db, routes, state::AppState};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let production = config::AppConfig::is_production();
    init_tracing(production);

    let config = config::AppConfig::load()?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        production,
        backend = ?config.database.backend,
        "Starting Exercise Tracker"
    );

    // Production schemas are migrated out of band
    let store = db::connect_store(&config.database, !production).await?;

    let mut state = AppState::new(store, config.clone());
    if let Some(handle) = install_metrics_recorder() {
        state = state.with_metrics(handle);
    }
    let app = routes::create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %listener.local_addr()?, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Install the Prometheus recorder backing `/metrics`
///
/// Returns None if a recorder cannot be installed; counters then become no-ops.
fn install_metrics_recorder() -> Option<PrometheusHandle> {
    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => Some(handle),
        Err(e) => {
            warn!(error = %e, "Metrics recorder not installed; /metrics will answer 404");
            None
        }
    }
}

/// Install the global subscriber: JSON lines in production, pretty output
/// otherwise. `RUST_LOG` overrides the default filter.
fn init_tracing(production: bool) {
    let default_filter = if production {
        "exercise_tracker_backend=info,tower_http=info"
    } else {
        "exercise_tracker_backend=debug,tower_http=debug,sqlx=warn"
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let json = production.then(|| fmt::layer().json());
    let pretty = (!production).then(|| fmt::layer().pretty());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json)
        .with(pretty)
        .init();
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!(signal = "SIGINT", "Shutting down");
        }
        _ = terminate => {
            info!(signal = "SIGTERM", "Shutting down");
        }
    }
}
