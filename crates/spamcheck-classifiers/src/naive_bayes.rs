//! Multinomial naive Bayes classifier

use crate::classifier::{argmax, softmax, Classifier};
use crate::features::FeatureVector;
use serde::{Deserialize, Serialize};
use spamcheck_core::{ClassId, Error, Result};

/// Fitted multinomial naive Bayes parameters as stored in the model artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultinomialNbParams {
    pub classes: Vec<ClassId>,
    pub class_log_prior: Vec<f64>,
    /// One row of per-feature log probabilities per class
    pub feature_log_prob: Vec<Vec<f64>>,
}

#[derive(Debug, Clone)]
pub struct MultinomialNb {
    classes: Vec<ClassId>,
    class_log_prior: Vec<f64>,
    feature_log_prob: Vec<Vec<f64>>,
    n_features: usize,
}

impl MultinomialNb {
    pub fn from_params(params: MultinomialNbParams) -> Result<Self> {
        let MultinomialNbParams {
            classes,
            class_log_prior,
            feature_log_prob,
        } = params;

        let n_classes = classes.len();
        if n_classes < 2 {
            return Err(Error::artifact(format!(
                "naive Bayes needs at least 2 classes, got {n_classes}"
            )));
        }

        if class_log_prior.len() != n_classes || feature_log_prob.len() != n_classes {
            return Err(Error::artifact(format!(
                "naive Bayes has {} priors and {} feature rows for {} classes",
                class_log_prior.len(),
                feature_log_prob.len(),
                n_classes
            )));
        }

        let n_features = feature_log_prob[0].len();
        if n_features == 0 || feature_log_prob.iter().any(|row| row.len() != n_features) {
            return Err(Error::artifact(
                "naive Bayes feature rows must be non-empty and equally sized",
            ));
        }

        let all_finite = class_log_prior
            .iter()
            .chain(feature_log_prob.iter().flatten())
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(Error::artifact(
                "naive Bayes parameters contain non-finite values",
            ));
        }

        Ok(Self {
            classes,
            class_log_prior,
            feature_log_prob,
            n_features,
        })
    }

    pub fn classes(&self) -> &[ClassId] {
        &self.classes
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Unnormalized joint log likelihood per class
    pub fn joint_log_likelihood(&self, row: &FeatureVector) -> Result<Vec<f64>> {
        self.feature_log_prob
            .iter()
            .zip(&self.class_log_prior)
            .map(|(log_probs, prior)| Ok(prior + row.dot(log_probs)?))
            .collect()
    }
}

impl Classifier for MultinomialNb {
    fn predict(&self, features: &[FeatureVector]) -> Result<Vec<ClassId>> {
        features
            .iter()
            .map(|row| {
                let jll = self.joint_log_likelihood(row)?;
                argmax(&jll)
                    .map(|index| self.classes[index])
                    .ok_or_else(|| Error::classifier("empty likelihood row"))
            })
            .collect()
    }

    fn predict_proba(&self, features: &[FeatureVector]) -> Result<Vec<Vec<f64>>> {
        features
            .iter()
            .map(|row| Ok(softmax(&self.joint_log_likelihood(row)?)))
            .collect()
    }
}
