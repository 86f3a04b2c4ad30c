//! Piece source module - where new shapes and colors come from
//!
//! The engine never touches a global RNG. It draws from a [`PieceSource`],
//! which is either a seedable [`RandomSource`] (uniform over the 7 shapes and
//! the 7 palette colors, chosen independently) or a [`ScriptedSource`] that
//! replays a fixed sequence for deterministic tests and demos.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{Color, ShapeKind};

/// Supplies the shape and color of every newly spawned piece
pub trait PieceSource {
    fn draw(&mut self) -> (ShapeKind, Color);
}

impl<S: PieceSource + ?Sized> PieceSource for &mut S {
    fn draw(&mut self) -> (ShapeKind, Color) {
        (**self).draw()
    }
}

/// Uniform random shapes and colors
#[derive(Debug, Clone)]
pub struct RandomSource<R = StdRng> {
    rng: R,
}

impl RandomSource<StdRng> {
    /// Deterministic source: the same seed yields the same piece sequence
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> PieceSource for RandomSource<R> {
    fn draw(&mut self) -> (ShapeKind, Color) {
        let kind = ShapeKind::ALL[self.rng.gen_range(0..ShapeKind::ALL.len())];
        let color = Color::PALETTE[self.rng.gen_range(0..Color::PALETTE.len())];
        (kind, color)
    }
}

/// Replays a fixed list of `(shape, color)` pairs, wrapping around at the end.
///
/// An empty script draws cyan I pieces.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    script: Vec<(ShapeKind, Color)>,
    index: usize,
}

impl ScriptedSource {
    pub fn new(script: impl IntoIterator<Item = (ShapeKind, Color)>) -> Self {
        Self {
            script: script.into_iter().collect(),
            index: 0,
        }
    }

    /// Always draws the same shape and color
    pub fn repeat(kind: ShapeKind, color: Color) -> Self {
        Self::new([(kind, color)])
    }

    /// Number of pieces drawn so far
    pub fn drawn(&self) -> usize {
        self.index
    }
}

impl PieceSource for ScriptedSource {
    fn draw(&mut self) -> (ShapeKind, Color) {
        let next = if self.script.is_empty() {
            (ShapeKind::I, Color::Cyan)
        } else {
            self.script[self.index % self.script.len()]
        };
        self.index += 1;
        next
    }
}
