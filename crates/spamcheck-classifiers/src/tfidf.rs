//! TF-IDF vectorizer restored from a fitted artifact

use crate::classifier::Vectorizer;
use crate::features::FeatureVector;
use regex::Regex;
use serde::{Deserialize, Serialize};
use spamcheck_core::{Error, Result};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Default token pattern: runs of two or more word characters
pub const DEFAULT_TOKEN_PATTERN: &str = r"(?u)\b\w\w+\b";

/// Row normalization applied after idf weighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    L1,
    L2,
}

/// Fitted TF-IDF parameters as stored in the vectorizer artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfParams {
    /// Term to column index
    pub vocabulary: HashMap<String, usize>,

    /// Inverse document frequency per column
    pub idf: Vec<f64>,

    /// Lowercase input before tokenizing
    #[serde(default = "default_true")]
    pub lowercase: bool,

    /// Regex selecting tokens
    #[serde(default = "default_token_pattern")]
    pub token_pattern: String,

    /// Inclusive word n-gram range
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),

    /// Terms dropped before n-grams are built
    #[serde(default)]
    pub stop_words: Vec<String>,

    /// Use term presence instead of counts
    #[serde(default)]
    pub binary: bool,

    /// Replace tf with 1 + ln(tf)
    #[serde(default)]
    pub sublinear_tf: bool,

    /// Row normalization; `null` disables it
    #[serde(default = "default_norm")]
    pub norm: Option<Norm>,
}

fn default_true() -> bool {
    true
}

fn default_token_pattern() -> String {
    DEFAULT_TOKEN_PATTERN.to_string()
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

fn default_norm() -> Option<Norm> {
    Some(Norm::L2)
}

/// TF-IDF vectorizer.
///
/// Mirrors the transform of a fitted scikit-learn style `TfidfVectorizer`
/// with a word analyzer.
pub struct TfidfVectorizer {
    params: TfidfParams,
    token_re: Regex,
    stop_words: HashSet<String>,
}

impl std::fmt::Debug for TfidfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfidfVectorizer")
            .field("vocabulary_size", &self.params.vocabulary.len())
            .field("n_features", &self.params.idf.len())
            .field("ngram_range", &self.params.ngram_range)
            .field("norm", &self.params.norm)
            .finish()
    }
}

impl TfidfVectorizer {
    /// Build a vectorizer from fitted parameters, validating their consistency
    pub fn from_params(params: TfidfParams) -> Result<Self> {
        let n_features = params.idf.len();
        if n_features == 0 {
            return Err(Error::artifact("tfidf vectorizer has an empty idf vector"));
        }

        if let Some(value) = params.idf.iter().find(|v| !v.is_finite()) {
            return Err(Error::artifact(format!(
                "tfidf vectorizer has a non-finite idf value: {value}"
            )));
        }

        if let Some((term, index)) = params
            .vocabulary
            .iter()
            .find(|(_, index)| **index >= n_features)
        {
            return Err(Error::artifact(format!(
                "vocabulary term {term:?} maps to column {index}, but only {n_features} idf values are present"
            )));
        }

        let (min_n, max_n) = params.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(Error::artifact(format!(
                "invalid ngram_range ({min_n}, {max_n})"
            )));
        }

        let token_re = Regex::new(&params.token_pattern).map_err(|e| {
            Error::artifact(format!(
                "invalid token_pattern {:?}: {}",
                params.token_pattern, e
            ))
        })?;

        let stop_words = params.stop_words.iter().cloned().collect();

        Ok(Self {
            params,
            token_re,
            stop_words,
        })
    }

    /// Number of feature columns
    pub fn n_features(&self) -> usize {
        self.params.idf.len()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.params.vocabulary.len()
    }

    pub fn params(&self) -> &TfidfParams {
        &self.params
    }

    /// Split a document into the terms looked up in the vocabulary
    pub fn analyze(&self, document: &str) -> Vec<String> {
        let text = if self.params.lowercase {
            Cow::Owned(document.to_lowercase())
        } else {
            Cow::Borrowed(document)
        };

        let tokens: Vec<&str> = self
            .token_re
            .find_iter(&text)
            .map(|m| m.as_str())
            .filter(|token| !self.stop_words.contains(*token))
            .collect();

        let (min_n, max_n) = self.params.ngram_range;
        let mut terms = Vec::new();
        for n in min_n..=max_n {
            terms.extend(tokens.windows(n).map(|window| window.join(" ")));
        }
        terms
    }

    fn transform_one(&self, document: &str) -> Result<FeatureVector> {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for term in self.analyze(document) {
            if let Some(&index) = self.params.vocabulary.get(&term) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let entries = counts
            .into_iter()
            .map(|(index, count)| {
                let mut tf = if self.params.binary { 1.0 } else { count };
                if self.params.sublinear_tf {
                    tf = 1.0 + tf.ln();
                }
                (index, tf * self.params.idf[index])
            })
            .collect();

        let mut row = FeatureVector::from_entries(self.n_features(), entries)?;

        let norm = match self.params.norm {
            Some(Norm::L2) => row.l2_norm(),
            Some(Norm::L1) => row.l1_norm(),
            None => 0.0,
        };
        if norm > 0.0 {
            row.scale(1.0 / norm);
        }

        Ok(row)
    }
}

impl Vectorizer for TfidfVectorizer {
    fn transform(&self, documents: &[&str]) -> Result<Vec<FeatureVector>> {
        documents.iter().map(|doc| self.transform_one(doc)).collect()
    }
}
