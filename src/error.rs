//! Error types for the transit-search library.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while preparing a search computation.
///
/// Every variant is reported before any output is produced, so callers
/// never observe a partially filled result set.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// Input series is empty.
    #[error("empty input series")]
    EmptyData,

    /// Input series is too short for the requested window.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Paired input series disagree in length.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Numerical failure that prevents the whole call from completing.
    #[error("computation error: {0}")]
    ComputationError(String),
}
