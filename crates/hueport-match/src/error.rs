//! Error types for the match crate.

use thiserror::Error;

/// Errors that can occur when compiling a name filter.
#[derive(Debug, Error)]
pub enum MatchError {
    /// The filter contained no usable pattern (empty, or only commas and whitespace).
    #[error("filter '{0}' contains no patterns")]
    EmptyPattern(String),

    /// A pattern could not be compiled.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Result type for match operations.
pub type Result<T> = std::result::Result<T, MatchError>;
