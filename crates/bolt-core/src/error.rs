use thiserror::Error;

use crate::geom::Location;

/// Errors raised by grid operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Coordinate outside `[0, width) x [0, height)`. Out-of-range access
    /// is an error, never a silent clamp.
    #[error("location {loc} outside {width}x{height} grid")]
    OutOfRange {
        loc: Location,
        width: i32,
        height: i32,
    },

    /// A maze must have positive width and height.
    #[error("grid dimensions must be positive, got {width}x{height}")]
    BadDimensions { width: i32, height: i32 },

    /// All rows of a grid specification must have the same length.
    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
}

pub type Result<T> = std::result::Result<T, GridError>;
