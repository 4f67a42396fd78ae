//! Renderers: push snapshots to an output.
//!
//! [`PlainRenderer`] appends text frames to any writer, so each step scrolls by
//! like a log. [`TerminalRenderer`] redraws a single frame in place on the
//! alternate screen, repainting only the board cells that changed.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use crate::core::GameSnapshot;
use crate::game_view::{final_line, BoardView, GAME_OVER_TEXT};
use crate::live::{encode_changes, encode_full, LiveFrame};

/// Something that can show simulation progress.
pub trait Renderer {
    /// Show the state after a step.
    fn draw(&mut self, snap: &GameSnapshot) -> Result<()>;

    /// Show the end of the run (game over notice and final score).
    fn finish(&mut self, snap: &GameSnapshot) -> Result<()>;
}

/// Scrolling text output.
pub struct PlainRenderer<W: Write> {
    out: W,
    view: BoardView,
}

impl<W: Write> PlainRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            view: BoardView::default(),
        }
    }

    pub fn with_view(mut self, view: BoardView) -> Self {
        self.view = view;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for PlainRenderer<W> {
    fn draw(&mut self, snap: &GameSnapshot) -> Result<()> {
        if snap.game_over {
            return Ok(());
        }
        writeln!(self.out)?;
        for line in self.view.text_frame(snap) {
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn finish(&mut self, snap: &GameSnapshot) -> Result<()> {
        if snap.game_over {
            writeln!(self.out, "{}", GAME_OVER_TEXT)?;
        }
        writeln!(self.out)?;
        writeln!(self.out, "{}", final_line(snap.score))?;
        self.out.flush()?;
        Ok(())
    }
}

/// In-place redraw on the alternate screen.
pub struct TerminalRenderer {
    stdout: io::Stdout,
    view: BoardView,
    shown: Option<LiveFrame>,
    buf: Vec<u8>,
    entered: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            view: BoardView::default().with_cell_width(2),
            shown: None,
            buf: Vec::with_capacity(4 * 1024),
            entered: false,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        self.shown = None;
        self.entered = true;
        Ok(())
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TerminalRenderer {
    fn draw(&mut self, snap: &GameSnapshot) -> Result<()> {
        let next = LiveFrame::capture(&self.view, snap);

        self.buf.clear();
        match &self.shown {
            Some(prev) => encode_changes(&self.view, prev, &next, &mut self.buf)?,
            None => encode_full(&self.view, &next, &mut self.buf)?,
        }
        if !self.buf.is_empty() {
            self.flush_buf()?;
        }
        self.shown = Some(next);
        Ok(())
    }

    fn finish(&mut self, snap: &GameSnapshot) -> Result<()> {
        self.exit()?;
        // The final board stays visible after leaving the alternate screen.
        PlainRenderer::new(io::stdout().lock())
            .with_view(BoardView::default())
            .draw(&GameSnapshot {
                game_over: false,
                ..snap.clone()
            })?;
        PlainRenderer::new(io::stdout().lock()).finish(snap)
    }
}
