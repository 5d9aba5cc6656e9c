//! Error types for clip selection

use thiserror::Error;

/// Selector errors
#[derive(Debug, Error)]
pub enum SelectorError {
    /// Selector cannot be built from the given pool or policy
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Asset repository enumerated no clips
    #[error("Clip pool is empty")]
    PoolEmpty,

    /// Distribution weights are malformed
    #[error(
        "Distribution invariant violated: weights sum to {total} (expected 100), {zero_weights} zero weight(s)"
    )]
    InvariantViolation { total: u64, zero_weights: usize },

    /// Asset repository has no clip with this identifier
    #[error("Clip not found: {0}")]
    ClipNotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SelectorError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

/// Result type for selector operations
pub type Result<T> = std::result::Result<T, SelectorError>;
