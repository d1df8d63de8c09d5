//! Health probes and metrics
//!
//! - `/health` reports the service version
//! - `/health/live` answers as long as the process serves requests
//! - `/health/ready` also checks the store and answers 503 when it is down
//! - `/metrics` renders the Prometheus exposition

use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Overall probe outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeStatus {
    Healthy,
    Alive,
    Ready,
    NotReady,
}

/// Outcome of a single dependency check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckState {
    Healthy,
    Unhealthy,
}

/// Probe response body
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: ProbeStatus,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<HealthChecks>,
}

impl HealthResponse {
    fn bare(status: ProbeStatus) -> Self {
        Self {
            status,
            version: VERSION,
            checks: None,
        }
    }
}

/// Dependency checks run by the readiness probe
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub store: StoreCheck,
}

/// Store reachability
#[derive(Debug, Serialize)]
pub struct StoreCheck {
    pub status: CheckState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::bare(ProbeStatus::Healthy))
}

/// GET /health/live
pub async fn liveness_check() -> Json<HealthResponse> {
    Json(HealthResponse::bare(ProbeStatus::Alive))
}

/// GET /health/ready
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    let store = match state.store().health_check().await {
        Ok(()) => StoreCheck {
            status: CheckState::Healthy,
            message: None,
        },
        Err(e) => StoreCheck {
            status: CheckState::Unhealthy,
            message: Some(e.to_string()),
        },
    };

    let (code, status) = match store.status {
        CheckState::Healthy => (StatusCode::OK, ProbeStatus::Ready),
        CheckState::Unhealthy => (StatusCode::SERVICE_UNAVAILABLE, ProbeStatus::NotReady),
    };

    let body = HealthResponse {
        status,
        version: VERSION,
        checks: Some(HealthChecks { store }),
    };
    (code, Json(body)).into_response()
}

/// GET /metrics
///
/// 404 when no recorder is installed.
pub async fn metrics(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .as_ref()
        .map(|handle| handle.render())
        .ok_or(StatusCode::NOT_FOUND)
}
