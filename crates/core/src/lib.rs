//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the board, the piece catalog and random piece
//! generation. It has **zero dependencies** on rendering or I/O, making it:
//!
//! - **Deterministic**: The same seed produces the same pieces
//! - **Testable**: Every rule is a plain function over plain data
//! - **Portable**: Runs headless, under a terminal renderer, or in benchmarks
//!
//! # Module Structure
//!
//! - [`board`]: Binary occupancy grid with collision checks and row clearing
//! - [`pieces`]: Shape matrices and the clockwise rotation transform
//! - [`rng`]: Uniform shape/rotation selection over an injected generator
//! - [`snapshot`]: Owned view of board and counters for renderers
//! - [`error`]: Validation errors for hand-built boards and pieces
//!
//! # Rules
//!
//! - **Catalog**: I (4x1), O (2x2), L (3x2) and Z (2x3) base shapes
//! - **Randomizer**: Uniform over shape identities, then uniform over 0-3 quarter turns
//! - **Clearing**: All full rows clear at once; survivors keep their order
//!
//! # Example
//!
//! ```
//! use tetris_stack_core::{shape, Board};
//! use tetris_stack_core::types::{Rotation, ShapeKind};
//!
//! let mut board = Board::new(10, 16);
//! let bar = shape(ShapeKind::I, Rotation::North);
//!
//! assert!(board.can_place(&bar, 12, 4));
//! board.fix(&bar, 12, 4);
//! assert_eq!(board.occupied_count(), 4);
//! assert_eq!(board.clear_full_rows(), 0);
//! ```

pub mod board;
pub mod error;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use tetris_stack_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::{BoardError, ShapeError};
pub use pieces::{base_shape, rotate_90, shape, Piece};
pub use rng::{random_piece, random_rotation, random_shape, DrawnPiece, PieceQueue};
pub use snapshot::GameSnapshot;
