//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! The store is created once at startup and injected here, so handlers never
//! reach for a global connection and tests can swap in [`MemoryStore`].
//!
//! [`MemoryStore`]: crate::repositories::MemoryStore

use crate::config::AppConfig;
use crate::repositories::ExerciseStore;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Shared application state
///
/// All fields are behind `Arc`, so cloning per request is O(1).
#[derive(Clone)]
pub struct AppState {
    /// Users and exercises
    pub store: Arc<dyn ExerciseStore>,
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Prometheus recorder handle, when one is installed
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create a new application state
    pub fn new(store: Arc<dyn ExerciseStore>, config: AppConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
            metrics: None,
        }
    }

    /// Attach the Prometheus handle rendered at `/metrics`
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    /// Get a reference to the store
    #[inline]
    pub fn store(&self) -> &dyn ExerciseStore {
        self.store.as_ref()
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
