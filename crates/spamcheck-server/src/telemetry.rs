//! Logging and metrics initialization

use crate::cli::LogFormat;
use anyhow::Result;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging
pub fn init_tracing(verbose: bool, format: LogFormat) {
    let filter = if verbose {
        EnvFilter::new("spamcheck=debug,tower_http=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("spamcheck=info,tower_http=warn"))
    };

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

/// Initialize metrics exporter and return handle for rendering
pub fn init_metrics() -> Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics: {}", e))?;

    metrics::describe_counter!(
        "spamcheck_requests_total",
        "Total number of requests by route"
    );
    metrics::describe_counter!(
        "spamcheck_predictions_total",
        "Total number of successful predictions by label"
    );
    metrics::describe_counter!(
        "spamcheck_errors_total",
        "Total number of failed requests by error kind"
    );
    metrics::describe_histogram!(
        "spamcheck_inference_latency_us",
        metrics::Unit::Microseconds,
        "Vectorize and classify latency in microseconds"
    );

    info!("Metrics exporter initialized");
    Ok(handle)
}
