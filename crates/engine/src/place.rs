use thiserror::Error;
use tracing::trace;

use crate::core::{Board, Piece};

/// Why a freshly generated piece could not enter the board.
///
/// This is the game-over signal, not a fault: the simulation stops issuing
/// pieces and reports its final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementRejected {
    #[error("{}", self.message())]
    TooWide,
    #[error("{}", self.message())]
    TooTall,
    #[error("{}", self.message())]
    SpawnBlocked,
}

impl PlacementRejected {
    pub fn code(self) -> &'static str {
        match self {
            PlacementRejected::TooWide | PlacementRejected::TooTall => "out_of_bounds",
            PlacementRejected::SpawnBlocked => "spawn_blocked",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PlacementRejected::TooWide => "piece is wider than the board",
            PlacementRejected::TooTall => "piece is taller than the board",
            PlacementRejected::SpawnBlocked => "spawn position is already occupied",
        }
    }
}

/// Where a piece came to rest and what its commit cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Landing {
    pub top: i32,
    pub left: i32,
    pub cleared: usize,
}

/// Spawn anchor `(top, left)`: row 0, horizontally centered (floor division).
///
/// `left` is negative when the piece is wider than the board.
pub fn spawn_anchor(board: &Board, piece: &Piece) -> (i32, i32) {
    let left = (board.width() as i32 - piece.width() as i32).div_euclid(2);
    (0, left)
}

/// Lowest row the piece can fall to in column `left`, starting from row 0.
///
/// Returns None when the piece does not fit at row 0.
pub fn landing_row(board: &Board, piece: &Piece, left: i32) -> Option<i32> {
    let mut top = 0;
    if !board.can_place(piece, top, left) {
        return None;
    }
    while board.can_place(piece, top + 1, left) {
        top += 1;
    }
    Some(top)
}

/// Drop `piece` straight down from its spawn anchor, fix it, and clear rows.
///
/// On rejection the board is left untouched.
pub fn drop_piece(board: &mut Board, piece: &Piece) -> Result<Landing, PlacementRejected> {
    let (_, left) = spawn_anchor(board, piece);

    let Some(top) = landing_row(board, piece, left) else {
        return Err(if piece.width() > board.width() {
            PlacementRejected::TooWide
        } else if piece.height() > board.height() {
            PlacementRejected::TooTall
        } else {
            PlacementRejected::SpawnBlocked
        });
    };

    board.fix(piece, top, left);
    let cleared = board.clear_full_rows();
    trace!(top, left, cleared, "piece fixed");

    Ok(Landing { top, left, cleared })
}
