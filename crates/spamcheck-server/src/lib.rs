//! spamcheck Server
//!
//! HTTP front end for the spam detector. Loads the model artifacts once at
//! startup and serves:
//! - `GET /` static status payload
//! - `POST /predict` single-message classification
//! - `GET /metrics` Prometheus exposition

pub mod cli;
pub mod config;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use cli::{Cli, LogFormat};
pub use config::ServerConfig;
pub use routes::{create_router, AppError, PREDICT_PATH};
pub use state::AppState;
