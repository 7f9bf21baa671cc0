use thiserror::Error;

use super::point::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("point {point} is outside of the grid with {rows} rows")]
    OutOfBounds { point: Point, rows: usize },
}

/// Error of parsing a grid from its text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseGridError {
    #[error("grid has no rows")]
    Empty,

    #[error("row {row} has {len} cells, but the grid is {expected} cells wide")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("unknown cell '{ch}' at {point}")]
    UnknownCell { ch: char, point: Point },

    #[error("marker '{0}' appears more than once")]
    DuplicateMarker(char),
}
