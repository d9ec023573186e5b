//! Grid error types.

use thiserror::Error;

/// Errors raised by direct grid access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Coordinate lies outside `[0, width) x [0, height)`.
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    /// A grid needs at least one row and one column.
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    /// Dimensions must be addressable by `i32` coordinates.
    #[error("grid dimensions {width}x{height} are too large")]
    TooLarge { width: usize, height: usize },
}
