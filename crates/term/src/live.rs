//! Live view: what the in-place renderer currently has on screen.
//!
//! A [`LiveFrame`] keeps the status text, one occupancy value per board cell
//! and the game-over flag. Consecutive frames are compared cell by cell, so a
//! drop only repaints the board cells it changed (plus the status row).
//!
//! Screen layout, top to bottom: status row, board rows, separator, and the
//! game-over notice once the run has ended.

use anyhow::Result;
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal::{self, ClearType},
    QueueableCommand,
};

use crate::core::GameSnapshot;
use crate::game_view::{BoardView, GAME_OVER_TEXT};
use crate::types::{Cell, EMPTY, FILLED};

const FILLED_FG: Color = Color::Rgb { r: 80, g: 220, b: 220 };
const EMPTY_FG: Color = Color::Rgb { r: 90, g: 90, b: 100 };
const BOARD_BG: Color = Color::Rgb { r: 30, g: 30, b: 40 };
const ALERT_FG: Color = Color::Rgb { r: 220, g: 80, b: 80 };

/// Board occupancy and status text as last drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveFrame {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    status: String,
    game_over: bool,
}

impl LiveFrame {
    pub fn capture(view: &BoardView, snap: &GameSnapshot) -> Self {
        Self {
            width: snap.board.width(),
            height: snap.board.height(),
            cells: snap.board.cells().to_vec(),
            status: view.status_line(snap),
            game_over: snap.game_over,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn cell(&self, col: u16, row: u16) -> Option<Cell> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.cells
            .get(row as usize * self.width as usize + col as usize)
            .copied()
    }

    fn same_size(&self, other: &LiveFrame) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Board cells `(col, row)` whose occupancy differs from `prev`.
    ///
    /// Yields nothing when the two frames have different sizes.
    pub fn changed_cells<'a>(
        &'a self,
        prev: &'a LiveFrame,
    ) -> impl Iterator<Item = (u16, u16)> + 'a {
        let width = self.width.max(1) as usize;
        let same_size = self.same_size(prev);
        self.cells
            .iter()
            .zip(&prev.cells)
            .enumerate()
            .filter(move |(_, (now, before))| same_size && now != before)
            .map(move |(i, _)| ((i % width) as u16, (i / width) as u16))
    }
}

/// Largest coordinate crossterm can address; it emits them 1-based.
const MAX_COORD: u16 = u16::MAX - 1;

fn board_y(row: u16) -> u16 {
    row.saturating_add(1).min(MAX_COORD)
}

fn separator_y(height: u16) -> u16 {
    height.saturating_add(1).min(MAX_COORD)
}

fn notice_y(height: u16) -> u16 {
    height.saturating_add(2).min(MAX_COORD)
}

fn cell_x(view: &BoardView, col: u16) -> u16 {
    col.saturating_mul(view.cell_width()).min(MAX_COORD)
}

/// Queue a complete redraw of `frame` into `out`.
pub fn encode_full(view: &BoardView, frame: &LiveFrame, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(ClearType::All))?;
    queue_status(out, frame.status())?;

    for row in 0..frame.height() {
        out.queue(cursor::MoveTo(0, board_y(row)))?;
        for col in 0..frame.width() {
            queue_cell(out, view, frame.cell(col, row).unwrap_or(EMPTY))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(cursor::MoveTo(0, separator_y(frame.height())))?;
    let rule_w = frame.width() as usize * view.cell_width() as usize;
    out.queue(Print("-".repeat(rule_w)))?;

    if frame.game_over() {
        queue_notice(out, frame.height())?;
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Queue only what changed between `prev` and `next`.
///
/// Leaves `out` untouched when the frames are equal; falls back to
/// [`encode_full`] when the board size changed.
pub fn encode_changes(
    view: &BoardView,
    prev: &LiveFrame,
    next: &LiveFrame,
    out: &mut Vec<u8>,
) -> Result<()> {
    if !next.same_size(prev) {
        return encode_full(view, next, out);
    }
    let start = out.len();

    if prev.status() != next.status() {
        queue_status(out, next.status())?;
    }

    for (col, row) in next.changed_cells(prev) {
        out.queue(cursor::MoveTo(cell_x(view, col), board_y(row)))?;
        queue_cell(out, view, next.cell(col, row).unwrap_or(EMPTY))?;
    }

    if prev.game_over() != next.game_over() {
        if next.game_over() {
            queue_notice(out, next.height())?;
        } else {
            out.queue(cursor::MoveTo(0, notice_y(next.height())))?;
            out.queue(terminal::Clear(ClearType::CurrentLine))?;
        }
    }

    if out.len() > start {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

fn queue_status(out: &mut Vec<u8>, status: &str) -> Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Bold))?;
    out.queue(Print(status))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(terminal::Clear(ClearType::UntilNewLine))?;
    Ok(())
}

fn queue_cell(out: &mut Vec<u8>, view: &BoardView, cell: Cell) -> Result<()> {
    let fg = if cell == FILLED { FILLED_FG } else { EMPTY_FG };
    out.queue(SetForegroundColor(fg))?;
    out.queue(SetBackgroundColor(BOARD_BG))?;
    let glyph = view.glyph(cell);
    for _ in 0..view.cell_width() {
        out.queue(Print(glyph))?;
    }
    Ok(())
}

fn queue_notice(out: &mut Vec<u8>, height: u16) -> Result<()> {
    out.queue(cursor::MoveTo(0, notice_y(height)))?;
    out.queue(SetForegroundColor(ALERT_FG))?;
    out.queue(SetAttribute(Attribute::Bold))?;
    out.queue(Print(GAME_OVER_TEXT))?;
    Ok(())
}
