//! Terminal presentation for the stacking simulation.
//!
//! The engine never prints. This crate turns its snapshots into text:
//!
//! - [`game_view`]: pure snapshot → text lines mapping
//! - [`renderer`]: plain scrolling output and an in-place crossterm renderer
//! - [`live`]: per-cell frame state and change encoding for the in-place renderer

pub mod game_view;
pub mod live;
pub mod renderer;

pub use tetris_stack_core as core;
pub use tetris_stack_types as types;

pub use game_view::{final_line, BoardView, EMPTY_GLYPH, FILLED_GLYPH, GAME_OVER_TEXT};
pub use live::{encode_changes, encode_full, LiveFrame};
pub use renderer::{PlainRenderer, Renderer, TerminalRenderer};
