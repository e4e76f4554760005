//! Error types for calcite.

use crate::scalar::MAX_ELEMENT_COUNT;
use thiserror::Error;

/// Result type alias using calcite's error
pub type Result<T> = std::result::Result<T, MathError>;

/// Errors surfaced by calcite operations.
///
/// Arithmetic edge cases (division by a zero complex number, logarithm of
/// zero, ...) are not represented here: they propagate IEEE-754 Inf/NaN
/// through the scalar type instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// Tensor construction requested more elements than the fixed maximum
    #[error("tensor shape {dims:?} exceeds the maximum element count of {max}")]
    CapacityExceeded {
        /// Requested axis sizes
        dims: Vec<usize>,
        /// The fixed maximum, [`MAX_ELEMENT_COUNT`]
        max: usize,
    },

    /// Axis query with an out-of-range index
    #[error("invalid dimension {dim} for a rank-{rank} tensor (dim() expects a 1-based index)")]
    InvalidDimension {
        /// The 1-based index passed to `dim()`
        dim: usize,
        /// Rank of the tensor
        rank: usize,
    },

    /// Linear-index computation on a rank-0 tensor
    #[error("cannot index a rank-0 tensor")]
    RankZeroAccess,

    /// Checked element access with an index past the end of its axis
    #[error("index {index} out of bounds for axis {axis} of size {size}")]
    IndexOutOfBounds {
        /// The offending index
        index: usize,
        /// Axis position (0-based)
        axis: usize,
        /// Size of that axis
        size: usize,
    },
}

impl MathError {
    /// Capacity error for the given axis sizes.
    pub fn capacity_exceeded(dims: &[usize]) -> Self {
        MathError::CapacityExceeded {
            dims: dims.to_vec(),
            max: MAX_ELEMENT_COUNT,
        }
    }
}
