//! Human-paced playback: renders each step, then waits.

use std::thread;
use std::time::Duration;

use anyhow::Result;

use crate::core::GameSnapshot;
use crate::engine::{Observer, Report, StepOutcome};
use crate::term::Renderer;

/// Engine observer that forwards snapshots to a renderer.
///
/// The delay applies between accepted steps only; the last step of a run and
/// the game-over step return immediately.
pub struct Playback<'a> {
    renderer: &'a mut dyn Renderer,
    delay: Duration,
}

impl<'a> Playback<'a> {
    pub fn new(renderer: &'a mut dyn Renderer, delay: Duration) -> Self {
        Self { renderer, delay }
    }
}

impl Observer for Playback<'_> {
    type Error = anyhow::Error;

    fn on_step(&mut self, snapshot: &GameSnapshot, outcome: &StepOutcome) -> Result<()> {
        self.renderer.draw(snapshot)?;
        if !outcome.is_game_over() && !snapshot.finished() && !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        Ok(())
    }

    fn on_finish(&mut self, snapshot: &GameSnapshot, _report: &Report) -> Result<()> {
        self.renderer.finish(snapshot)
    }
}
