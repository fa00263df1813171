//! Shared application state

use crate::config::ServerConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use spamcheck_classifiers::ModelState;
use std::sync::Arc;

/// Application state shared across all requests.
///
/// Built once at startup and never mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<ServerConfig>,

    /// Model artifacts, or the reason they could not be loaded
    pub models: Arc<ModelState>,

    /// Prometheus handle for rendering `/metrics`; absent when no recorder is installed
    pub metrics_handle: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(config: ServerConfig, models: ModelState) -> Self {
        Self {
            config: Arc::new(config),
            models: Arc::new(models),
            metrics_handle: None,
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics_handle = Some(handle);
        self
    }
}
