//! Error types for spamcheck

/// Result type alias using spamcheck's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for spamcheck operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A model artifact is missing, corrupt, or in an unsupported format
    #[error("artifact error: {0}")]
    Artifact(String),

    /// Feature width does not match what a model expects
    #[error("dimension mismatch: expected {expected} features, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Classifier execution errors
    #[error("classifier error: {0}")]
    Classifier(String),

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new artifact error
    pub fn artifact(msg: impl Into<String>) -> Self {
        Self::Artifact(msg.into())
    }

    /// Create a new classifier error
    pub fn classifier(msg: impl Into<String>) -> Self {
        Self::Classifier(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Create a dimension mismatch error
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }
}
