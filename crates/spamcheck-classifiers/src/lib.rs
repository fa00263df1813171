//! spamcheck Classifiers
//!
//! Inference side of the spam detector: turns a message into a feature row
//! and scores it with a pre-trained model loaded from disk.
//!
//! The crate is organised around two narrow traits:
//! - [`Vectorizer`]: text in, sparse feature rows out
//! - [`Classifier`]: feature rows in, class ids and class probabilities out
//!
//! Concrete implementations ([`TfidfVectorizer`], [`LogisticRegression`],
//! [`MultinomialNb`]) are built from JSON artifacts by the [`artifact`]
//! module. [`SpamDetector`] ties one vectorizer and one classifier together,
//! and [`ModelState`] records whether loading them succeeded.

pub mod artifact;
pub mod classifier;
pub mod detector;
pub mod features;
pub mod linear;
pub mod naive_bayes;
pub mod tfidf;

pub use artifact::{
    load_classifier, load_vectorizer, ArtifactPaths, ClassifierArtifact, VectorizerArtifact,
    DEFAULT_MODEL_FILE, DEFAULT_VECTORIZER_FILE, FORMAT_VERSION,
};
pub use classifier::{Classifier, Vectorizer};
pub use detector::{ModelState, SpamDetector};
pub use features::{FeatureMatrix, FeatureVector};
pub use linear::{LogisticRegression, LogisticRegressionParams};
pub use naive_bayes::{MultinomialNb, MultinomialNbParams};
pub use tfidf::{Norm, TfidfParams, TfidfVectorizer};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::classifier::{Classifier, Vectorizer};
    pub use crate::detector::{ModelState, SpamDetector};
    pub use crate::features::{FeatureMatrix, FeatureVector};
    pub use spamcheck_core::{Error, Label, Prediction, Result};
}
