//! spamcheck Core
//!
//! Types shared across spamcheck components.
//!
//! This crate provides:
//! - The error type and result alias used by the classifier and server crates
//! - The prediction result returned for a classified message
//! - The spam/ham label and the class id convention behind it

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{ClassId, Label, Prediction, SPAM_CLASS_ID};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{ClassId, Label, Prediction};
}
