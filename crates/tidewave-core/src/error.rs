//! Error types for tidewave.
//!
//! Geometry, compositing and animation never fail; only loading and parsing
//! configuration produces these errors.

use thiserror::Error;

/// Main error type for tidewave operations.
#[derive(Error, Debug)]
pub enum TidewaveError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for tidewave operations.
pub type Result<T> = std::result::Result<T, TidewaveError>;
