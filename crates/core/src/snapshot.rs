use crate::board::Board;

/// Read-only view of a simulation handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Board,
    /// Accepted pieces so far.
    pub step: u32,
    pub steps_requested: u32,
    pub score: u64,
    pub lines: u64,
    /// Rows cleared by the most recent accepted piece.
    pub last_cleared: usize,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn new(board: Board, steps_requested: u32) -> Self {
        Self {
            board,
            step: 0,
            steps_requested,
            score: 0,
            lines: 0,
            last_cleared: 0,
            game_over: false,
        }
    }

    pub fn finished(&self) -> bool {
        self.game_over || self.step >= self.steps_requested
    }
}
