//! spamcheck Server
//!
//! Loads the spam classifier and its TF-IDF vectorizer at startup and serves
//! single-message predictions over HTTP.

use anyhow::Result;
use clap::Parser;
use spamcheck_classifiers::ModelState;
use spamcheck_server::{create_router, telemetry, AppState, Cli, ServerConfig};
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    telemetry::init_tracing(cli.verbose, cli.log_format);

    info!("Starting spamcheck server");

    // Load configuration
    let config = ServerConfig::load(&cli)?;
    let addr = config.socket_addr()?;
    info!(
        models_dir = %config.resolved_models_dir().display(),
        "Configuration loaded"
    );

    // Initialize metrics
    let metrics_handle = telemetry::init_metrics()?;

    // Load artifacts; a failure leaves the service up without predictions
    let models = ModelState::load(&config.artifact_paths());
    if !models.is_ready() {
        warn!("Serving in degraded mode: POST /predict will return 500");
    }

    let state = AppState::new(config, models).with_metrics(metrics_handle);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Listen for shutdown signals (SIGTERM, SIGINT)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    warn!("Shutdown signal received, stopping server...");
}
