//! Errors raised by [`KdTree`](crate::KdTree) and [`Point`](crate::Point).
//!
//! Every error here is a precondition violation detected before the tree is
//! modified, so a failed call always leaves the tree exactly as it was.

use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KdTreeError {
    /// A tree was requested with a dimension of zero.
    #[error("k-d tree dimension must be at least 1, got {0}")]
    InvalidDimension(usize),

    /// A point's co-ordinate count does not match the dimension it is used with.
    #[error("expected a point with {expected} co-ordinates, found {actual}")]
    DimensionMismatch {
        /// dimension of the tree (or of the requested point)
        expected: usize,
        /// number of co-ordinates actually supplied
        actual: usize,
    },

    /// A co-ordinate was requested on an axis the point does not have.
    #[error("axis {axis} is out of range for a point with {dimension} co-ordinates")]
    IndexOutOfRange {
        /// the requested axis
        axis: usize,
        /// the point's dimension
        dimension: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, KdTreeError>;
