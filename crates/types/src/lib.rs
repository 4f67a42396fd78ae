//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the simulation.
//! All types are plain data with no I/O, making them usable from the core
//! engine, the terminal renderers and the driver binary alike.
//!
//! # Board Dimensions
//!
//! The reference playfield is narrower and shorter than a guideline field:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 16 rows (indexed 0-15, row 0 at the top)
//! - **Spawn column**: `floor((width - piece_width) / 2)`, spawn row 0
//!
//! # Driver Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SCORE_PER_LINE` | 100 | Points awarded per cleared row |
//! | `DEFAULT_STEPS` | 30 | Pieces simulated when the prompt gets no usable answer |
//! | `DEFAULT_DELAY_MS` | 150 | Pause between rendered steps |
//! | `MAX_BOARD_DIM` | 64 | Largest width/height accepted from configuration |
//!
//! # Examples
//!
//! ```
//! use tetris_stack_types::{ShapeKind, Rotation, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! // Labels used in log fields
//! assert_eq!(ShapeKind::Z.as_str(), "z");
//!
//! // Four clockwise turns come back around
//! let rotation = Rotation::from_quarter_turns(4);
//! assert_eq!(rotation, Rotation::North);
//!
//! // Board dimensions
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 16);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u16 = 10;

/// Board height in cells (16 rows)
pub const BOARD_HEIGHT: u16 = 16;

/// Points awarded for each cleared row.
pub const SCORE_PER_LINE: u64 = 100;

/// Number of pieces simulated when no step count is configured.
pub const DEFAULT_STEPS: u32 = 30;

/// Delay between rendered steps in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 150;

/// Upper bound for configured board dimensions.
pub const MAX_BOARD_DIM: u16 = 64;

/// Value of an empty board or piece cell.
pub const EMPTY: Cell = 0;

/// Value of an occupied board or piece cell.
pub const FILLED: Cell = 1;

/// A single occupancy cell: `0` is empty, `1` is occupied.
///
/// Used by both the board and piece matrices as flat row-major buffers.
pub type Cell = u8;

/// The four base shapes of the catalog
///
/// Each shape is stored in its spawn (unrotated) orientation:
/// - **I**: 4x1 vertical bar
/// - **O**: 2x2 square
/// - **L**: 3x2 L-shape
/// - **Z**: 2x3 Z-shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    L,
    Z,
}

impl ShapeKind {
    /// Every shape identity, in catalog order.
    pub const ALL: [ShapeKind; 4] = [ShapeKind::I, ShapeKind::O, ShapeKind::L, ShapeKind::Z];

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::O => "o",
            ShapeKind::L => "l",
            ShapeKind::Z => "z",
        }
    }
}

/// Rotation states as clockwise quarter turns from the spawn orientation
///
/// - **North**: Spawn orientation (0°)
/// - **East**: Rotated 90° clockwise
/// - **South**: Rotated 180°
/// - **West**: Rotated 270° clockwise
///
/// The rotation cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Every rotation state, in clockwise order.
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    /// Number of clockwise quarter turns from North (0..=3).
    pub fn quarter_turns(&self) -> u8 {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Build a rotation from a count of clockwise quarter turns (taken mod 4).
    pub fn from_quarter_turns(turns: u8) -> Self {
        Self::ALL[(turns % 4) as usize]
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}
