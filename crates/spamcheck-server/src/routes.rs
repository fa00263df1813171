//! HTTP routes and handlers

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use spamcheck_core::Prediction;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::state::AppState;

/// Path of the classification endpoint
pub const PREDICT_PATH: &str = "/predict";

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(home))
        .route(PREDICT_PATH, post(predict))
        .route("/metrics", get(render_metrics))
        .fallback(fallback)
        .layer(DefaultBodyLimit::max(state.config.max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn home() -> Json<Value> {
    metrics::counter!("spamcheck_requests_total", "route" => "home").increment(1);

    Json(json!({
        "status": "API running",
        "endpoint": PREDICT_PATH,
    }))
}

async fn render_metrics(State(state): State<AppState>) -> String {
    state
        .metrics_handle
        .as_ref()
        .map(|handle| handle.render())
        .unwrap_or_default()
}

/// Classify one message.
///
/// The body is read raw so that the model check runs before any parsing and
/// every malformed body maps to the same client error.
async fn predict(State(state): State<AppState>, body: Bytes) -> Result<Json<Prediction>, AppError> {
    metrics::counter!("spamcheck_requests_total", "route" => "predict").increment(1);
    let request_id = Uuid::new_v4();

    let Some(detector) = state.models.detector().cloned() else {
        warn!(%request_id, "Prediction requested but models are not loaded");
        return Err(AppError::ModelNotLoaded);
    };

    let message = extract_message(&body).ok_or(AppError::EmptyMessage)?;
    debug!(%request_id, chars = message.chars().count(), "Classifying message");

    let start = Instant::now();
    let outcome = tokio::task::spawn_blocking(move || detector.detect(&message)).await;

    let prediction = match outcome {
        Ok(Ok(prediction)) => prediction,
        Ok(Err(e)) => {
            error!(%request_id, error = %e, "Prediction failed");
            return Err(AppError::PredictionFailed);
        }
        Err(e) => {
            error!(%request_id, error = %e, "Prediction task aborted");
            return Err(AppError::PredictionFailed);
        }
    };

    let latency_us = start.elapsed().as_micros() as u64;
    metrics::histogram!("spamcheck_inference_latency_us").record(latency_us as f64);
    metrics::counter!("spamcheck_predictions_total", "label" => prediction.label.as_str())
        .increment(1);

    info!(
        %request_id,
        label = %prediction.label,
        confidence = prediction.confidence,
        latency_us,
        "Prediction served"
    );

    Ok(Json(prediction))
}

/// Pull a non-blank, trimmed `message` string out of a JSON body
fn extract_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    let message = value.get("message")?.as_str()?.trim();

    if message.is_empty() {
        None
    } else {
        Some(message.to_string())
    }
}

async fn fallback() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" }))).into_response()
}

/// Request failures reported to clients.
///
/// Messages are fixed; internal detail is logged, never returned.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Empty message")]
    EmptyMessage,

    #[error("Model not loaded")]
    ModelNotLoaded,

    #[error("Prediction failed")]
    PredictionFailed,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::EmptyMessage => StatusCode::BAD_REQUEST,
            Self::ModelNotLoaded | Self::PredictionFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::EmptyMessage => "empty_message",
            Self::ModelNotLoaded => "model_not_loaded",
            Self::PredictionFailed => "prediction_failed",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        metrics::counter!("spamcheck_errors_total", "kind" => self.kind()).increment(1);

        let body = json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}
