//! Server configuration

use crate::cli::Cli;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use spamcheck_classifiers::{ArtifactPaths, DEFAULT_MODEL_FILE, DEFAULT_VECTORIZER_FILE};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the model artifacts; the executable's directory when
    /// unset, and relative paths are taken from the executable's directory
    #[serde(default)]
    pub models_dir: Option<PathBuf>,

    /// Classifier artifact file name
    #[serde(default = "default_model_file")]
    pub model_file: String,

    /// Vectorizer artifact file name
    #[serde(default = "default_vectorizer_file")]
    pub vectorizer_file: String,

    /// Largest accepted request body
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl ServerConfig {
    /// Load configuration from file and CLI overrides
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        // Try to load from file, or use defaults
        let mut config = match locate_config(&cli.config) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_overrides(cli);
        Ok(config)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Apply CLI and environment overrides
    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(listen) = &cli.listen {
            self.listen = listen.clone();
        }

        if let Some(port) = cli.port {
            self.port = port;
        }

        if let Some(models_dir) = &cli.models_dir {
            self.models_dir = Some(models_dir.clone());
        }
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let ip: IpAddr = self
            .listen
            .parse()
            .with_context(|| format!("invalid listen address {:?}", self.listen))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Directory the artifacts are read from
    pub fn resolved_models_dir(&self) -> PathBuf {
        match &self.models_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => install_dir().join(dir),
            None => install_dir(),
        }
    }

    pub fn artifact_paths(&self) -> ArtifactPaths {
        ArtifactPaths::with_files(
            self.resolved_models_dir(),
            &self.model_file,
            &self.vectorizer_file,
        )
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            port: default_port(),
            models_dir: None,
            model_file: default_model_file(),
            vectorizer_file: default_vectorizer_file(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

/// Directory containing the running executable
pub fn install_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Find the config file: as given, then relative to the executable's directory
fn locate_config(path: &Path) -> Option<PathBuf> {
    if path.exists() {
        return Some(path.to_path_buf());
    }

    if path.is_relative() {
        let installed = install_dir().join(path);
        if installed.exists() {
            return Some(installed);
        }
    }

    None
}

fn default_listen() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    10000
}

fn default_model_file() -> String {
    DEFAULT_MODEL_FILE.to_string()
}

fn default_vectorizer_file() -> String {
    DEFAULT_VECTORIZER_FILE.to_string()
}

fn default_max_body_bytes() -> usize {
    1024 * 1024
}
