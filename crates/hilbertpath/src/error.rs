//! Error types for curve construction and lookup.

use thiserror::Error;

use crate::curve::MAX_ORDER;

/// Errors surfaced by curve construction and point lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested order is below the minimum of 1.
    #[error("curve order must be at least 1, got {0}")]
    InvalidOrder(u32),

    /// The requested order would overflow the 32-bit index space.
    #[error("curve order {0} exceeds the supported maximum of {MAX_ORDER}")]
    OrderTooLarge(u32),

    /// The index does not address a point on the curve.
    #[error("index {index} is out of range for a curve of {length} points")]
    IndexOutOfRange {
        /// The rejected index.
        index: u32,
        /// Total number of points on the curve.
        length: u32,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
