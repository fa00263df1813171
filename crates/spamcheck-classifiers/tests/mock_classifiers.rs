//! Mock vectorizers and classifiers for testing
//!
//! Provides configurable mock implementations of the Vectorizer and
//! Classifier traits for testing the detector and its error handling.

use spamcheck_classifiers::{Classifier, FeatureVector, SpamDetector, Vectorizer};
use spamcheck_core::{ClassId, Error, Label, Result};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

/// A vectorizer that records what it was asked to transform
pub struct MockVectorizer {
    dim: usize,
    seen: Mutex<Vec<String>>,
    fail: bool,
}

impl MockVectorizer {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            seen: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// Make every transform call fail
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

impl Vectorizer for MockVectorizer {
    fn transform(&self, documents: &[&str]) -> Result<Vec<FeatureVector>> {
        if self.fail {
            return Err(Error::classifier("mock vectorizer failure"));
        }
        self.seen
            .lock()
            .unwrap()
            .extend(documents.iter().map(|d| d.to_string()));
        Ok(documents.iter().map(|_| FeatureVector::zeros(self.dim)).collect())
    }
}

/// A classifier returning a fixed class id and probability row
pub struct MockClassifier {
    class_id: ClassId,
    proba: Vec<f64>,
    call_count: AtomicU32,
}

impl MockClassifier {
    pub fn new(class_id: ClassId, proba: Vec<f64>) -> Self {
        Self {
            class_id,
            proba,
            call_count: AtomicU32::new(0),
        }
    }

    /// Get the number of times predict was called
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }
}

impl Classifier for MockClassifier {
    fn predict(&self, features: &[FeatureVector]) -> Result<Vec<ClassId>> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        Ok(features.iter().map(|_| self.class_id).collect())
    }

    fn predict_proba(&self, features: &[FeatureVector]) -> Result<Vec<Vec<f64>>> {
        Ok(features.iter().map(|_| self.proba.clone()).collect())
    }
}

#[test]
fn test_detector_passes_trimmed_single_message() {
    let vectorizer = Arc::new(MockVectorizer::new(4));
    let classifier = Arc::new(MockClassifier::new(1, vec![0.1, 0.9]));
    let detector = SpamDetector::new(vectorizer.clone(), classifier.clone());

    let prediction = detector.detect("  Claim your prize\n").unwrap();

    assert_eq!(vectorizer.seen(), vec!["Claim your prize".to_string()]);
    assert_eq!(classifier.call_count(), 1);
    assert!(prediction.spam);
    assert_eq!(prediction.label, Label::Spam);
    assert_eq!(prediction.confidence, 0.9);
}

#[test]
fn test_confidence_is_max_probability_not_spam_probability() {
    let detector = SpamDetector::new(
        Arc::new(MockVectorizer::new(2)),
        Arc::new(MockClassifier::new(0, vec![0.7, 0.3])),
    );

    let prediction = detector.detect("see you soon").unwrap();
    assert!(!prediction.spam);
    assert_eq!(prediction.label, Label::Ham);
    assert_eq!(prediction.confidence, 0.7);
}

#[test]
fn test_class_ids_other_than_one_are_ham() {
    let detector = SpamDetector::new(
        Arc::new(MockVectorizer::new(2)),
        Arc::new(MockClassifier::new(2, vec![0.2, 0.2, 0.6])),
    );

    assert_eq!(detector.detect("anything").unwrap().label, Label::Ham);
}

#[test]
fn test_vectorizer_failure_propagates() {
    let detector = SpamDetector::new(
        Arc::new(MockVectorizer::new(2).failing()),
        Arc::new(MockClassifier::new(1, vec![0.0, 1.0])),
    );

    assert!(detector.detect("free prize").is_err());
}

#[test]
fn test_invalid_confidence_is_an_error() {
    let nan = SpamDetector::new(
        Arc::new(MockVectorizer::new(2)),
        Arc::new(MockClassifier::new(1, vec![f64::NAN, f64::NAN])),
    );
    assert!(nan.detect("free prize").is_err());

    let too_big = SpamDetector::new(
        Arc::new(MockVectorizer::new(2)),
        Arc::new(MockClassifier::new(1, vec![0.0, 1.5])),
    );
    assert!(too_big.detect("free prize").is_err());

    let empty = SpamDetector::new(
        Arc::new(MockVectorizer::new(2)),
        Arc::new(MockClassifier::new(1, vec![])),
    );
    assert!(empty.detect("free prize").is_err());
}
