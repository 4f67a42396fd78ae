//! Tetris Stack (workspace facade crate).
//!
//! Re-exports the workspace crates as `tetris_stack::{core,engine,term,types}`
//! so the binary, integration tests and benchmarks share one import path.

pub mod cli;
pub mod playback;
pub mod report;

pub use tetris_stack_core as core;
pub use tetris_stack_engine as engine;
pub use tetris_stack_term as term;
pub use tetris_stack_types as types;
