//! Board module - manages the occupancy grid
//!
//! The board is a `width x height` grid where each cell is either empty (0) or filled (1).
//! Uses a flat vector in row-major order; dimensions are fixed at construction.
//! Coordinates: (col, row) where col ranges 0..width (left to right) and
//! row ranges 0..height (top to bottom). Anchors are signed so callers can ask
//! about positions left of or above the grid.

use crate::error::BoardError;
use crate::pieces::Piece;
use crate::types::{Cell, EMPTY, FILLED};

/// The playfield - a fixed-size grid of binary cells
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: u16,
    height: u16,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![EMPTY; width as usize * height as usize],
        }
    }

    /// Build a board from explicit rows (top row first).
    ///
    /// Every row must have the same non-zero length and contain only 0/1 values.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Result<Self, BoardError> {
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if rows.is_empty() || width == 0 {
            return Err(BoardError::Empty);
        }
        if width > u16::MAX as usize || rows.len() > u16::MAX as usize {
            return Err(BoardError::TooLarge);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(BoardError::Ragged {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if value != EMPTY && value != FILLED {
                    return Err(BoardError::InvalidCell { row, col, value });
                }
            }
            cells.extend_from_slice(values);
        }

        Ok(Self {
            width: width as u16,
            height: rows.len() as u16,
            cells,
        })
    }

    /// Calculate flat index from (col, row) coordinates
    #[inline(always)]
    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || col >= self.width as i32 || row < 0 || row >= self.height as i32 {
            return None;
        }
        Some(row as usize * self.width as usize + col as usize)
    }

    /// Get width of the board
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Get height of the board
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Get cell at (col, row).
    /// Returns None if out of bounds
    pub fn get(&self, col: i32, row: i32) -> Option<Cell> {
        self.index(col, row).map(|idx| self.cells[idx])
    }

    /// Set cell at (col, row).
    /// Returns false if out of bounds
    pub fn set(&mut self, col: i32, row: i32, cell: Cell) -> bool {
        match self.index(col, row) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, col: i32, row: i32) -> bool {
        matches!(self.get(col, row), Some(FILLED))
    }

    /// Check whether `piece` fits with its top-left corner at (`top`, `left`).
    ///
    /// The whole piece rectangle must lie inside the grid, and no occupied piece
    /// cell may overlap an occupied board cell.
    pub fn can_place(&self, piece: &Piece, top: i32, left: i32) -> bool {
        let (top, left) = (top as i64, left as i64);
        if left < 0 || left + piece.width() as i64 > self.width as i64 {
            return false;
        }
        if top < 0 || top + piece.height() as i64 > self.height as i64 {
            return false;
        }

        piece
            .occupied()
            .all(|(r, c)| !self.is_occupied(left as i32 + c as i32, top as i32 + r as i32))
    }

    /// Write every occupied piece cell onto the board at (`top`, `left`).
    ///
    /// The placement is not re-validated; callers check [`Board::can_place`] first.
    /// Cells that would fall outside the grid are skipped.
    pub fn fix(&mut self, piece: &Piece, top: i32, left: i32) {
        for (r, c) in piece.occupied() {
            self.set(left + c as i32, top + r as i32, FILLED);
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row)
            .map(|cells| cells.iter().all(|&cell| cell == FILLED))
            .unwrap_or(false)
    }

    /// Clear all full rows in place and return how many were removed.
    ///
    /// Surviving rows keep their relative order and settle at the bottom;
    /// the vacated rows at the top become empty. Uses a two-pointer pass.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width as usize;
        let height = self.height as usize;
        let mut write_row = height;
        let mut cleared = 0;

        // Scan from bottom to top
        for read_row in (0..height).rev() {
            if self.is_row_full(read_row) {
                cleared += 1;
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src = read_row * width;
                    self.cells.copy_within(src..src + width, write_row * width);
                }
            }
        }

        // Clear the remaining rows at the top
        self.cells[..write_row * width].fill(EMPTY);
        cleared
    }

    /// Non-mutating counterpart of [`Board::clear_full_rows`].
    ///
    /// Filters out full rows, then pads the top with empty rows.
    pub fn cleared(&self) -> (Board, usize) {
        let survivors: Vec<&[Cell]> = self
            .rows()
            .filter(|row| !row.iter().all(|&cell| cell == FILLED))
            .collect();
        let cleared = self.height as usize - survivors.len();

        let mut cells = vec![EMPTY; cleared * self.width as usize];
        for row in survivors {
            cells.extend_from_slice(row);
        }

        let board = Board {
            width: self.width,
            height: self.height,
            cells,
        };
        (board, cleared)
    }

    /// Borrow a single row (top row is 0).
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.height as usize {
            return None;
        }
        let width = self.width as usize;
        let start = row * width;
        Some(&self.cells[start..start + width])
    }

    /// Iterate rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        // chunks_exact panics on 0; a zero-width board simply has no rows to show
        self.cells.chunks_exact(self.width.max(1) as usize)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of filled cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == FILLED).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == EMPTY)
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::Piece;

    fn bar() -> Piece {
        Piece::from_rows(&[[1u8], [1], [1], [1]]).unwrap()
    }

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(10, 16);
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 15), Some(159));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 16), None);
    }

    #[test]
    fn test_can_place_rejects_negative_anchor() {
        let board = Board::new(10, 16);
        assert!(!board.can_place(&bar(), -1, 0));
        assert!(!board.can_place(&bar(), 0, -1));
        assert!(board.can_place(&bar(), 0, 0));
    }

    #[test]
    fn test_can_place_rejects_floor_overrun() {
        let board = Board::new(10, 16);
        assert!(board.can_place(&bar(), 12, 4));
        assert!(!board.can_place(&bar(), 13, 4));
    }

    #[test]
    fn test_can_place_ignores_empty_piece_cells() {
        // Z at (0, 0) leaves (row 0, col 2) and (row 1, col 0) uncovered.
        let z = Piece::from_rows(&[[1u8, 1, 0], [0, 1, 1]]).unwrap();
        let mut board = Board::new(4, 4);
        board.set(2, 0, FILLED);
        board.set(0, 1, FILLED);
        assert!(board.can_place(&z, 0, 0));

        board.set(1, 1, FILLED);
        assert!(!board.can_place(&z, 0, 0));
    }

    #[test]
    fn test_fix_skips_out_of_bounds() {
        let mut board = Board::new(3, 3);
        board.fix(&bar(), 1, 1);
        assert_eq!(board.occupied_count(), 2);
        assert!(board.is_occupied(1, 1));
        assert!(board.is_occupied(1, 2));
    }

    #[test]
    fn test_clear_full_rows_in_place_matches_pure() {
        let mut board = Board::from_rows(&[
            [0u8, 1, 0],
            [1, 1, 1],
            [1, 0, 0],
            [1, 1, 1],
        ])
        .unwrap();

        let (pure, pure_cleared) = board.cleared();
        let cleared = board.clear_full_rows();

        assert_eq!(cleared, 2);
        assert_eq!(pure_cleared, 2);
        assert_eq!(board, pure);
        assert_eq!(board.row(0), Some(&[0, 0, 0][..]));
        assert_eq!(board.row(1), Some(&[0, 0, 0][..]));
        assert_eq!(board.row(2), Some(&[0, 1, 0][..]));
        assert_eq!(board.row(3), Some(&[1, 0, 0][..]));
    }

    #[test]
    fn test_from_rows_rejects_bad_input() {
        let empty: [[u8; 0]; 0] = [];
        assert_eq!(Board::from_rows(&empty), Err(BoardError::Empty));
        assert_eq!(
            Board::from_rows(&[vec![0u8, 1], vec![0]]),
            Err(BoardError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            Board::from_rows(&[[0u8, 2]]),
            Err(BoardError::InvalidCell {
                row: 0,
                col: 1,
                value: 2
            })
        );
    }
}
