//! Spam detection over a loaded vectorizer/classifier pair

use crate::artifact::{load_classifier, load_vectorizer, ArtifactPaths};
use crate::classifier::{max_probability, Classifier, Vectorizer};
use spamcheck_core::{Error, Prediction, Result};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info};

/// Classifies single messages with a vectorizer and classifier from the same training run
#[derive(Clone)]
pub struct SpamDetector {
    vectorizer: Arc<dyn Vectorizer>,
    classifier: Arc<dyn Classifier>,
}

impl std::fmt::Debug for SpamDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpamDetector").finish_non_exhaustive()
    }
}

impl SpamDetector {
    pub fn new(vectorizer: Arc<dyn Vectorizer>, classifier: Arc<dyn Classifier>) -> Self {
        Self {
            vectorizer,
            classifier,
        }
    }

    /// Load both artifacts; fails if either one cannot be loaded
    pub fn load(paths: &ArtifactPaths) -> Result<Self> {
        let classifier = load_classifier(&paths.model)?;
        let vectorizer = load_vectorizer(&paths.vectorizer)?;
        Ok(Self::new(vectorizer, classifier))
    }

    /// Classify one message.
    ///
    /// The message is trimmed and must not be empty afterwards. Confidence is
    /// the highest class probability the model assigns to this input.
    pub fn detect(&self, message: &str) -> Result<Prediction> {
        let message = message.trim();
        if message.is_empty() {
            return Err(Error::classifier("message is empty"));
        }

        let start = Instant::now();

        let features = self.vectorizer.transform(&[message])?;
        let class_ids = self.classifier.predict(&features)?;
        let probabilities = self.classifier.predict_proba(&features)?;

        let class_id = *class_ids
            .first()
            .ok_or_else(|| Error::classifier("classifier returned no class id"))?;

        let confidence = probabilities
            .first()
            .and_then(|row| max_probability(row))
            .ok_or_else(|| Error::classifier("classifier returned no probabilities"))?;

        if !(0.0..=1.0).contains(&confidence) {
            return Err(Error::classifier(format!(
                "confidence {confidence} is outside [0, 1]"
            )));
        }

        let prediction = Prediction::new(class_id, confidence);
        debug!(
            label = %prediction.label,
            confidence = prediction.confidence,
            latency_us = start.elapsed().as_micros() as u64,
            "Message classified"
        );

        Ok(prediction)
    }
}

/// Outcome of loading the model artifacts at startup
#[derive(Debug, Clone)]
pub enum ModelState {
    /// Both artifacts loaded
    Ready(Arc<SpamDetector>),

    /// Loading failed; predictions are refused until restart
    Unavailable { reason: String },
}

impl ModelState {
    /// Load the artifacts, degrading to `Unavailable` instead of failing
    pub fn load(paths: &ArtifactPaths) -> Self {
        info!(
            model = %paths.model.display(),
            vectorizer = %paths.vectorizer.display(),
            "Loading model artifacts"
        );

        match SpamDetector::load(paths) {
            Ok(detector) => {
                info!("Models loaded, ready for predictions");
                Self::Ready(Arc::new(detector))
            }
            Err(e) => {
                error!(error = %e, "Model load failed, predictions disabled until restart");
                Self::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }

    pub fn ready(detector: SpamDetector) -> Self {
        Self::Ready(Arc::new(detector))
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn detector(&self) -> Option<&Arc<SpamDetector>> {
        match self {
            Self::Ready(detector) => Some(detector),
            Self::Unavailable { .. } => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}
