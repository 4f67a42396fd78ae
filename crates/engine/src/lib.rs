//! Placement engine and simulation loop.
//!
//! [`place`] drops a single piece straight down from its spawn column and
//! commits it; [`simulation`] repeats that for a number of steps, keeping score
//! and reporting each step to an [`Observer`].
//!
//! # Example
//!
//! ```
//! use tetris_stack_engine::{Headless, Simulation, SimulationConfig};
//!
//! let mut sim = Simulation::seeded(SimulationConfig::default(), 7);
//! let report = sim.run(30, &mut Headless).unwrap();
//!
//! assert!(report.steps_completed <= 30);
//! assert_eq!(report.score, report.lines * 100);
//! ```

pub mod place;
pub mod simulation;

pub use tetris_stack_core as core;
pub use tetris_stack_types as types;

pub use place::{drop_piece, landing_row, spawn_anchor, Landing, PlacementRejected};
pub use simulation::{Headless, Observer, Report, Simulation, SimulationConfig, StepOutcome};
