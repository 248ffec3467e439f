//! Error types for amrc-classify
//!
//! Construction errors (pattern compilation) abort start-up. Errors raised
//! while classifying a single report never reach the caller: the service
//! boundary turns them into a degraded classification.

use thiserror::Error;

/// Classification error type
#[derive(Debug, Error)]
pub enum ClassificationError {
    /// A taxonomy regex failed to compile
    #[error("Failed to compile {name} pattern: {source}")]
    Pattern {
        name: &'static str,
        #[source]
        source: regex::Error,
    },

    /// A sub-classifier produced a result that breaks a result invariant
    #[error("Invalid classification result: {0}")]
    InvalidResult(String),

    /// A sub-classifier failed outright
    #[error("{source_id} classifier failed: {message}")]
    Classifier {
        source_id: &'static str,
        message: String,
    },

    /// amrc-common error
    #[error("Common error: {0}")]
    Common(#[from] amrc_common::Error),
}

/// Result type for classification operations
pub type ClassificationResult<T> = Result<T, ClassificationError>;
