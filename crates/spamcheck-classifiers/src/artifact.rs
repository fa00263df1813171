//! Model artifact files: format, paths, and loading
//!
//! Artifacts are JSON objects carrying a `format_version` and a `type` tag:
//!
//! ```json
//! {"format_version": 1, "type": "logistic_regression", "classes": [0, 1], ...}
//! ```
//!
//! Loading validates each artifact on its own. Nothing checks that the
//! vectorizer's width matches the classifier's; a mismatch is reported by the
//! classifier when it is first asked to predict.

use crate::classifier::{Classifier, Vectorizer};
use crate::linear::{LogisticRegression, LogisticRegressionParams};
use crate::naive_bayes::{MultinomialNb, MultinomialNbParams};
use crate::tfidf::{TfidfParams, TfidfVectorizer};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use spamcheck_core::{Error, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Artifact format version this build reads
pub const FORMAT_VERSION: u64 = 1;

/// File name of the classifier artifact
pub const DEFAULT_MODEL_FILE: &str = "spam_model.json";

/// File name of the vectorizer artifact
pub const DEFAULT_VECTORIZER_FILE: &str = "tfidf_vectorizer.json";

/// Serialized classifier, tagged by model family
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClassifierArtifact {
    LogisticRegression(LogisticRegressionParams),
    MultinomialNb(MultinomialNbParams),
}

impl ClassifierArtifact {
    /// Validate the parameters and build the classifier
    pub fn build(self) -> Result<Arc<dyn Classifier>> {
        Ok(match self {
            Self::LogisticRegression(params) => Arc::new(LogisticRegression::from_params(params)?),
            Self::MultinomialNb(params) => Arc::new(MultinomialNb::from_params(params)?),
        })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::LogisticRegression(_) => "logistic_regression",
            Self::MultinomialNb(_) => "multinomial_nb",
        }
    }
}

/// Serialized vectorizer, tagged by transformer family
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum VectorizerArtifact {
    Tfidf(TfidfParams),
}

impl VectorizerArtifact {
    pub fn build(self) -> Result<Arc<dyn Vectorizer>> {
        Ok(match self {
            Self::Tfidf(params) => Arc::new(TfidfVectorizer::from_params(params)?),
        })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Tfidf(_) => "tfidf",
        }
    }
}

/// Locations of the two artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub model: PathBuf,
    pub vectorizer: PathBuf,
}

impl ArtifactPaths {
    /// Default file names inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::with_files(dir, DEFAULT_MODEL_FILE, DEFAULT_VECTORIZER_FILE)
    }

    pub fn with_files(
        dir: impl AsRef<Path>,
        model_file: impl AsRef<Path>,
        vectorizer_file: impl AsRef<Path>,
    ) -> Self {
        let dir = dir.as_ref();
        Self {
            model: dir.join(model_file),
            vectorizer: dir.join(vectorizer_file),
        }
    }
}

/// Read and decode an artifact file, enforcing the format version
pub fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = std::fs::read(path).map_err(|e| {
        Error::artifact(format!("failed to read {}: {}", path.display(), e))
    })?;

    let value: serde_json::Value = serde_json::from_slice(&bytes).map_err(|e| {
        Error::artifact(format!("{} is not valid JSON: {}", path.display(), e))
    })?;

    match value.get("format_version").and_then(serde_json::Value::as_u64) {
        Some(FORMAT_VERSION) => {}
        Some(other) => {
            return Err(Error::artifact(format!(
                "{} has unsupported format_version {} (expected {})",
                path.display(),
                other,
                FORMAT_VERSION
            )))
        }
        None => {
            return Err(Error::artifact(format!(
                "{} is missing format_version",
                path.display()
            )))
        }
    }

    serde_json::from_value(value).map_err(|e| {
        Error::artifact(format!("{} is not a valid artifact: {}", path.display(), e))
    })
}

/// Load and validate the classifier artifact at `path`
pub fn load_classifier(path: &Path) -> Result<Arc<dyn Classifier>> {
    let artifact: ClassifierArtifact = read_artifact(path)?;
    debug!(path = %path.display(), kind = artifact.kind(), "Decoded classifier artifact");
    artifact
        .build()
        .map_err(|e| Error::artifact(format!("{}: {}", path.display(), e)))
}

/// Load and validate the vectorizer artifact at `path`
pub fn load_vectorizer(path: &Path) -> Result<Arc<dyn Vectorizer>> {
    let artifact: VectorizerArtifact = read_artifact(path)?;
    debug!(path = %path.display(), kind = artifact.kind(), "Decoded vectorizer artifact");
    artifact
        .build()
        .map_err(|e| Error::artifact(format!("{}: {}", path.display(), e)))
}
