//! BoardView: maps a `GameSnapshot` into text.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Board, GameSnapshot};
use crate::types::{Cell, FILLED};

/// Glyph for an occupied cell.
pub const FILLED_GLYPH: char = '■';

/// Glyph for an empty cell.
pub const EMPTY_GLYPH: char = '.';

pub const GAME_OVER_TEXT: &str = "GAME OVER - the piece could not be placed.";

/// Line printed once a run ends.
pub fn final_line(score: u64) -> String {
    format!("Simulation finished. Final score: {}", score)
}

/// Renders boards one glyph per cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardView {
    filled: char,
    empty: char,
    /// Board cell width in terminal columns (live view only).
    cell_w: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            filled: FILLED_GLYPH,
            empty: EMPTY_GLYPH,
            cell_w: 1,
        }
    }
}

impl BoardView {
    pub fn with_glyphs(mut self, filled: char, empty: char) -> Self {
        self.filled = filled;
        self.empty = empty;
        self
    }

    pub fn with_cell_width(mut self, cell_w: u16) -> Self {
        self.cell_w = cell_w.max(1);
        self
    }

    pub fn cell_width(&self) -> u16 {
        self.cell_w
    }

    pub fn glyph(&self, cell: Cell) -> char {
        if cell == FILLED {
            self.filled
        } else {
            self.empty
        }
    }

    pub fn status_line(&self, snap: &GameSnapshot) -> String {
        format!(
            "Step {} | Lines cleared: {} | Score: {}",
            snap.step, snap.last_cleared, snap.score
        )
    }

    /// One string per board row, top first.
    pub fn board_lines(&self, board: &Board) -> Vec<String> {
        board
            .rows()
            .map(|row| row.iter().map(|&cell| self.glyph(cell)).collect())
            .collect()
    }

    pub fn separator(&self, board: &Board) -> String {
        "-".repeat(board.width() as usize)
    }

    /// Plain text frame: status line, board rows, separator.
    pub fn text_frame(&self, snap: &GameSnapshot) -> Vec<String> {
        let mut lines = Vec::with_capacity(snap.board.height() as usize + 2);
        lines.push(self.status_line(snap));
        lines.extend(self.board_lines(&snap.board));
        lines.push(self.separator(&snap.board));
        lines
    }
}
