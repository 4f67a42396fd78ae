//! Simulation loop - drives pieces through the placement engine.
//!
//! Each step draws a fresh piece, drops it, and folds the result into the
//! running score. The first rejected spawn ends the run. Rendering and pacing
//! belong to the [`Observer`] the caller passes in.

use std::convert::Infallible;

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::core::{Board, GameSnapshot, PieceQueue};
use crate::place::{drop_piece, Landing, PlacementRejected};
use crate::types::{Rotation, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH, SCORE_PER_LINE};

/// Board dimensions and scoring for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    pub width: u16,
    pub height: u16,
    pub score_per_line: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            score_per_line: SCORE_PER_LINE,
        }
    }
}

/// Result of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Placed {
        kind: ShapeKind,
        rotation: Rotation,
        landing: Landing,
    },
    GameOver {
        kind: ShapeKind,
        rotation: Rotation,
        reason: PlacementRejected,
    },
}

impl StepOutcome {
    pub fn cleared(&self) -> usize {
        match self {
            StepOutcome::Placed { landing, .. } => landing.cleared,
            StepOutcome::GameOver { .. } => 0,
        }
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self, StepOutcome::GameOver { .. })
    }
}

/// Final summary of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Report {
    pub steps_requested: u32,
    pub steps_completed: u32,
    pub score: u64,
    pub lines: u64,
    pub game_over: bool,
}

/// Receives every step of a run.
///
/// `on_step` fires after each accepted piece and once for the rejected piece
/// that ends the game. `on_finish` fires once with the final state and report.
pub trait Observer {
    type Error;

    fn on_step(
        &mut self,
        snapshot: &GameSnapshot,
        outcome: &StepOutcome,
    ) -> Result<(), Self::Error>;

    fn on_finish(
        &mut self,
        _snapshot: &GameSnapshot,
        _report: &Report,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<F> Observer for F
where
    F: FnMut(&GameSnapshot, &StepOutcome),
{
    type Error = Infallible;

    fn on_step(
        &mut self,
        snapshot: &GameSnapshot,
        outcome: &StepOutcome,
    ) -> Result<(), Infallible> {
        self(snapshot, outcome);
        Ok(())
    }
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct Headless;

impl Observer for Headless {
    type Error = Infallible;

    fn on_step(&mut self, _: &GameSnapshot, _: &StepOutcome) -> Result<(), Infallible> {
        Ok(())
    }
}

/// Board, piece source and counters for one run.
#[derive(Debug, Clone)]
pub struct Simulation<R = ChaCha8Rng> {
    config: SimulationConfig,
    board: Board,
    queue: PieceQueue<R>,
    steps_requested: u32,
    steps_completed: u32,
    score: u64,
    lines: u64,
    last_cleared: usize,
    game_over: bool,
}

impl Simulation<ChaCha8Rng> {
    pub fn seeded(config: SimulationConfig, seed: u64) -> Self {
        Self::new(config, PieceQueue::seeded(seed))
    }

    pub fn from_entropy(config: SimulationConfig) -> Self {
        Self::new(config, PieceQueue::from_entropy())
    }
}

impl<R: Rng> Simulation<R> {
    pub fn new(config: SimulationConfig, queue: PieceQueue<R>) -> Self {
        Self {
            board: Board::new(config.width, config.height),
            config,
            queue,
            steps_requested: 0,
            steps_completed: 0,
            score: 0,
            lines: 0,
            last_cleared: 0,
            game_over: false,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn lines(&self) -> u64 {
        self.lines
    }

    pub fn steps_completed(&self) -> u32 {
        self.steps_completed
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Draw one piece and drop it.
    ///
    /// Returns None once the game is over.
    pub fn step(&mut self) -> Option<StepOutcome> {
        if self.game_over {
            return None;
        }

        let drawn = self.queue.draw();
        let (kind, rotation) = (drawn.kind, drawn.rotation);

        match drop_piece(&mut self.board, &drawn.piece) {
            Ok(landing) => {
                self.steps_completed += 1;
                self.lines += landing.cleared as u64;
                self.score += landing.cleared as u64 * self.config.score_per_line;
                self.last_cleared = landing.cleared;
                debug!(
                    step = self.steps_completed,
                    kind = kind.as_str(),
                    rotation = rotation.as_str(),
                    top = landing.top,
                    left = landing.left,
                    cleared = landing.cleared,
                    score = self.score,
                    "piece placed"
                );
                Some(StepOutcome::Placed {
                    kind,
                    rotation,
                    landing,
                })
            }
            Err(reason) => {
                self.game_over = true;
                self.last_cleared = 0;
                info!(
                    step = self.steps_completed,
                    kind = kind.as_str(),
                    rotation = rotation.as_str(),
                    reason = reason.code(),
                    "game over"
                );
                Some(StepOutcome::GameOver {
                    kind,
                    rotation,
                    reason,
                })
            }
        }
    }

    /// Run up to `steps` more steps, stopping early on game over.
    pub fn run<O: Observer>(&mut self, steps: u32, observer: &mut O) -> Result<Report, O::Error> {
        self.steps_requested = self.steps_completed.saturating_add(steps);

        for _ in 0..steps {
            let Some(outcome) = self.step() else {
                break;
            };
            observer.on_step(&self.snapshot(), &outcome)?;
            if outcome.is_game_over() {
                break;
            }
        }

        let report = self.report();
        info!(
            steps = report.steps_completed,
            score = report.score,
            lines = report.lines,
            game_over = report.game_over,
            "simulation finished"
        );
        observer.on_finish(&self.snapshot(), &report)?;
        Ok(report)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            step: self.steps_completed,
            steps_requested: self.steps_requested,
            score: self.score,
            lines: self.lines,
            last_cleared: self.last_cleared,
            game_over: self.game_over,
        }
    }

    pub fn report(&self) -> Report {
        Report {
            steps_requested: self.steps_requested,
            steps_completed: self.steps_completed,
            score: self.score,
            lines: self.lines,
            game_over: self.game_over,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_runs_are_reproducible() {
        let mut a = Simulation::seeded(SimulationConfig::default(), 42);
        let mut b = Simulation::seeded(SimulationConfig::default(), 42);

        let ra = a.run(60, &mut Headless).unwrap();
        let rb = b.run(60, &mut Headless).unwrap();

        assert_eq!(ra, rb);
        assert_eq!(a.board(), b.board());
    }

    #[test]
    fn score_tracks_lines() {
        for seed in 0..20 {
            let mut sim = Simulation::seeded(SimulationConfig::default(), seed);
            let report = sim.run(200, &mut Headless).unwrap();
            assert_eq!(report.score, report.lines * SCORE_PER_LINE);
        }
    }

    #[test]
    fn step_is_noop_after_game_over() {
        // 1x1 board: nothing in the catalog fits.
        let config = SimulationConfig {
            width: 1,
            height: 1,
            ..SimulationConfig::default()
        };
        let mut sim = Simulation::seeded(config, 9);

        let first = sim.step().unwrap();
        assert!(first.is_game_over());
        assert!(sim.game_over());
        assert_eq!(sim.step(), None);
        assert_eq!(sim.steps_completed(), 0);
        assert!(sim.board().is_empty());
    }

    #[test]
    fn observer_sees_every_step() {
        let mut sim = Simulation::seeded(SimulationConfig::default(), 3);
        let mut seen = Vec::new();
        let mut observer = |snap: &GameSnapshot, outcome: &StepOutcome| {
            seen.push((snap.step, outcome.is_game_over()));
        };

        let report = sim.run(10, &mut observer).unwrap();

        let accepted = seen.iter().filter(|(_, over)| !over).count() as u32;
        assert_eq!(accepted, report.steps_completed);
        if report.game_over {
            assert!(seen.last().map(|(_, over)| *over).unwrap_or(false));
        } else {
            assert_eq!(seen.len(), 10);
        }
    }
}
