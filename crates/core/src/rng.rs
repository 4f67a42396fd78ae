//! RNG module - uniform random piece generation
//!
//! Every draw is independent: a shape identity is picked uniformly from the
//! catalog, then a rotation is picked uniformly from the four quarter turns.
//! There is no bag and no history, so shapes may repeat back to back.
//!
//! The random source is always passed in. [`PieceQueue::seeded`] wraps a
//! ChaCha generator for reproducible runs and tests.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::pieces::{shape, Piece};
use crate::types::{Rotation, ShapeKind};

/// Pick a shape identity uniformly from the catalog.
pub fn random_shape<R: Rng + ?Sized>(rng: &mut R) -> ShapeKind {
    ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())]
}

/// Pick a rotation uniformly from {0, 1, 2, 3} quarter turns.
pub fn random_rotation<R: Rng + ?Sized>(rng: &mut R) -> Rotation {
    Rotation::from_quarter_turns(rng.gen_range(0..4u8))
}

/// Generate a random shape in a random rotation.
pub fn random_piece<R: Rng + ?Sized>(rng: &mut R) -> Piece {
    let kind = random_shape(rng);
    shape(kind, random_rotation(rng))
}

/// A generated piece together with how it was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawnPiece {
    pub kind: ShapeKind,
    pub rotation: Rotation,
    pub piece: Piece,
}

/// Piece source that owns its random generator.
#[derive(Debug, Clone)]
pub struct PieceQueue<R = ChaCha8Rng> {
    rng: R,
    drawn: u64,
}

impl PieceQueue<ChaCha8Rng> {
    /// Deterministic queue: the same seed always yields the same pieces.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Queue seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> PieceQueue<R> {
    pub fn new(rng: R) -> Self {
        Self { rng, drawn: 0 }
    }

    /// Draw the next piece
    pub fn draw(&mut self) -> DrawnPiece {
        let kind = random_shape(&mut self.rng);
        let rotation = random_rotation(&mut self.rng);
        self.drawn += 1;
        DrawnPiece {
            kind,
            rotation,
            piece: shape(kind, rotation),
        }
    }

    /// Number of pieces drawn so far
    pub fn drawn(&self) -> u64 {
        self.drawn
    }
}

impl Default for PieceQueue<ChaCha8Rng> {
    fn default() -> Self {
        Self::seeded(1)
    }
}
