//! Vectorizer and classifier traits and shared probability helpers

use crate::features::FeatureVector;
use spamcheck_core::{ClassId, Result};

/// Text-to-feature transformer fitted alongside a classifier
pub trait Vectorizer: Send + Sync {
    /// Transform a batch of raw documents into one feature row each
    fn transform(&self, documents: &[&str]) -> Result<Vec<FeatureVector>>;
}

/// Pre-trained classifier over vectorizer output
pub trait Classifier: Send + Sync {
    /// Predict one class id per feature row
    fn predict(&self, features: &[FeatureVector]) -> Result<Vec<ClassId>>;

    /// Per-class probabilities for each feature row, ordered like the model's classes
    fn predict_proba(&self, features: &[FeatureVector]) -> Result<Vec<Vec<f64>>>;
}

/// Numerically stable logistic function
pub fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

/// Normalize log-scores into probabilities using log-sum-exp
pub fn softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

/// Index of the largest value; the first one wins on ties
pub fn argmax(values: &[f64]) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (index, value)| match best {
            Some((_, best_value)) if *value <= best_value => best,
            _ => Some((index, *value)),
        })
        .map(|(index, _)| index)
}

/// Highest probability in a row
pub fn max_probability(row: &[f64]) -> Option<f64> {
    argmax(row).map(|index| row[index])
}
