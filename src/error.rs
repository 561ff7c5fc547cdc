//! Error types for the tracer core.

use thiserror::Error;

/// Errors raised by intersection, shading and entity construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TracerError {
    /// A required value was non-finite or otherwise unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Degenerate geometry, e.g. normalizing a zero-length vector.
    #[error("division by zero: {0}")]
    DivisionByZero(&'static str),

    /// An entity could not be built from the given parameters.
    #[error("construction failed: {0}")]
    Construction(String),
}

/// Result type for tracer operations.
pub type Result<T> = std::result::Result<T, TracerError>;
