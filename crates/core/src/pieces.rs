//! Pieces module - shape matrices and the clockwise rotation transform
//!
//! A piece is a small rectangular binary matrix. The catalog holds four base
//! shapes in their spawn orientation; every other orientation is derived by
//! rotating the matrix, so there are no per-rotation tables to keep in sync.

use crate::error::ShapeError;
use crate::types::{Cell, Rotation, ShapeKind, EMPTY, FILLED};

/// One shape in one rotation state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    height: u16,
    width: u16,
    /// Row-major cells (row * width + col)
    cells: Vec<Cell>,
}

impl Piece {
    /// Build a piece from explicit rows (top row first).
    ///
    /// The matrix must be non-empty, rectangular, binary, and contain at least
    /// one occupied cell.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Result<Self, ShapeError> {
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if rows.is_empty() || width == 0 {
            return Err(ShapeError::Empty);
        }
        if width > u16::MAX as usize || rows.len() > u16::MAX as usize {
            return Err(ShapeError::TooLarge);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(ShapeError::Ragged {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            if let Some((col, &value)) = values
                .iter()
                .enumerate()
                .find(|(_, &v)| v != EMPTY && v != FILLED)
            {
                return Err(ShapeError::InvalidCell { row, col, value });
            }
            cells.extend_from_slice(values);
        }

        if !cells.contains(&FILLED) {
            return Err(ShapeError::NoOccupiedCells);
        }

        Ok(Self {
            height: rows.len() as u16,
            width: width as u16,
            cells,
        })
    }

    /// Number of rows
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Number of columns
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Cell at (row, col), None if out of range
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.height as usize || col >= self.width as usize {
            return None;
        }
        Some(self.cells[row * self.width as usize + col])
    }

    /// Iterate rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.width as usize)
    }

    /// Offsets `(row, col)` of every occupied cell, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = (u16, u16)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &cell)| cell == FILLED)
            .map(move |(i, _)| ((i / width as usize) as u16, (i % width as usize) as u16))
    }

    /// Number of occupied cells
    pub fn cell_count(&self) -> usize {
        self.occupied().count()
    }

    /// Rotated copy, see [`rotate_90`].
    pub fn rotated_cw(&self) -> Piece {
        rotate_90(self)
    }
}

/// Rotate a piece 90° clockwise.
///
/// An `h x w` input becomes a `w x h` output with `out[c][h - 1 - r] = in[r][c]`.
/// Four rotations reproduce the original content.
pub fn rotate_90(piece: &Piece) -> Piece {
    let h = piece.height as usize;
    let w = piece.width as usize;
    // Output has `h` columns.
    let mut cells = vec![EMPTY; w * h];
    for r in 0..h {
        for c in 0..w {
            cells[c * h + (h - 1 - r)] = piece.cells[r * w + c];
        }
    }

    Piece {
        height: piece.width,
        width: piece.height,
        cells,
    }
}

/// I: 4x1 vertical bar
const I_CELLS: [Cell; 4] = [1, 1, 1, 1];

/// O: 2x2 square
const O_CELLS: [Cell; 4] = [1, 1, 1, 1];

/// L: 3x2
const L_CELLS: [Cell; 6] = [
    1, 0, //
    1, 0, //
    1, 1,
];

/// Z: 2x3
const Z_CELLS: [Cell; 6] = [
    1, 1, 0, //
    0, 1, 1,
];

/// Get the spawn-orientation matrix for a shape kind
pub fn base_shape(kind: ShapeKind) -> Piece {
    let (height, width, cells): (u16, u16, &[Cell]) = match kind {
        ShapeKind::I => (4, 1, &I_CELLS),
        ShapeKind::O => (2, 2, &O_CELLS),
        ShapeKind::L => (3, 2, &L_CELLS),
        ShapeKind::Z => (2, 3, &Z_CELLS),
    };
    Piece {
        height,
        width,
        cells: cells.to_vec(),
    }
}

/// Get the matrix for a shape kind in the given rotation state
pub fn shape(kind: ShapeKind, rotation: Rotation) -> Piece {
    let mut piece = base_shape(kind);
    for _ in 0..rotation.quarter_turns() {
        piece = piece.rotated_cw();
    }
    piece
}
