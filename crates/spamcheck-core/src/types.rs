//! Core types for spamcheck

use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer class id produced by a classifier
pub type ClassId = i64;

/// Class id the models use for spam; every other id is ham
pub const SPAM_CLASS_ID: ClassId = 1;

/// Human-readable verdict for a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Label {
    Spam,
    Ham,
}

impl Label {
    /// Map a predicted class id to a label
    pub fn from_class_id(class_id: ClassId) -> Self {
        if class_id == SPAM_CLASS_ID {
            Self::Spam
        } else {
            Self::Ham
        }
    }

    pub fn is_spam(self) -> bool {
        matches!(self, Self::Spam)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Spam => "SPAM",
            Self::Ham => "HAM",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification outcome for a single message
///
/// Serializes to the wire shape `{"spam": bool, "label": "SPAM"|"HAM", "confidence": f64}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// True iff the predicted class id is the spam class
    pub spam: bool,

    /// Label matching `spam`
    pub label: Label,

    /// Highest per-class probability for this input (0.0-1.0)
    pub confidence: f64,
}

impl Prediction {
    /// Build a prediction from a class id and its confidence
    pub fn new(class_id: ClassId, confidence: f64) -> Self {
        let label = Label::from_class_id(class_id);
        Self {
            spam: label.is_spam(),
            label,
            confidence,
        }
    }
}
