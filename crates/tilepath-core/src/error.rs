use crate::geom::{Point, Range};

/// Errors raised for malformed input to grids and searches.
///
/// An unreachable goal is *not* an error: searches report it with an empty
/// route.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid grid dimensions {width}x{height}: both must be positive")]
    InvalidGridDimensions { width: i32, height: i32 },
    #[error("terrain has {found} cells, expected {expected}")]
    CellCountMismatch { expected: usize, found: usize },
    #[error("terrain row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("coordinate {point} is outside {bounds}")]
    CoordinateOutOfBounds { point: Point, bounds: Range },
    #[error("search gave up after expanding {limit} nodes")]
    ExpansionLimit { limit: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
