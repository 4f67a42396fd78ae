//! Construction errors for boards and piece matrices.
//!
//! Neither type appears on the simulation hot path: the built-in catalog and
//! `Board::new` are valid by construction. They guard hand-written fixtures.

use thiserror::Error;

use crate::types::Cell;

/// Rejected piece matrix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("piece matrix has no rows or no columns")]
    Empty,
    #[error("piece row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("piece cell ({row}, {col}) holds {value}, expected 0 or 1")]
    InvalidCell { row: usize, col: usize, value: Cell },
    #[error("piece matrix has no occupied cells")]
    NoOccupiedCells,
    #[error("piece matrix exceeds {max}x{max} cells", max = u16::MAX)]
    TooLarge,
}

/// Rejected board layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board has no rows or no columns")]
    Empty,
    #[error("board row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("board cell ({row}, {col}) holds {value}, expected 0 or 1")]
    InvalidCell { row: usize, col: usize, value: Cell },
    #[error("board exceeds {max}x{max} cells", max = u16::MAX)]
    TooLarge,
}
