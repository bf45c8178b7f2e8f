//! Error types for lanemath operations.
//!
//! Per-element special values (NaN, infinities) are encoded in the results
//! themselves, IEEE style; errors here are reserved for misuse of the slice
//! API that no element value could express.

use std::fmt;

/// Errors that can occur during lanemath slice operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanemathError {
    /// A binary slice operation was given slices of different lengths.
    LengthMismatch {
        /// Length of the left-hand slice.
        left: usize,
        /// Length of the right-hand slice.
        right: usize,
    },
}

impl fmt::Display for LanemathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanemathError::LengthMismatch { left, right } => write!(
                f,
                "slice length mismatch: left has {} elements, right has {}",
                left, right
            ),
        }
    }
}

impl std::error::Error for LanemathError {}

/// Result type alias for lanemath operations.
pub type Result<T> = std::result::Result<T, LanemathError>;

/// Creates a length mismatch error.
pub fn length_mismatch(left: usize, right: usize) -> LanemathError {
    LanemathError::LengthMismatch { left, right }
}
