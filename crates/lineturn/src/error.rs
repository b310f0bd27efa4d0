//! Error types for lineturn.

use thiserror::Error;

/// Result alias for fallible lineturn operations.
pub type Result<T> = std::result::Result<T, LineError>;

/// Errors raised by line construction.
///
/// Only the generator fails; bearing aggregation degrades bad geometry to zero.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    /// The input points or parameters are invalid.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}
