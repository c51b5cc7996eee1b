//! Serve direction source
//!
//! The only randomness in a match is the heading picked when the ball is put
//! back in play after a point. It comes through `ServeSource` so hosts can
//! seed it and tests can pin it.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::unit_or_unchanged;
use crate::consts::SERVE_X_BIAS;

/// Supplies the two raw draws for a serve heading
pub trait ServeSource {
    /// Two values in [0, 1)
    fn draw(&mut self) -> (f32, f32);
}

/// Build a unit serve heading from a pair of [0, 1) draws.
///
/// The x draw is biased by `SERVE_X_BIAS`, so every serve heads toward
/// positive x, whoever scored.
pub fn serve_direction(draw: (f32, f32)) -> Vec2 {
    let (x, y) = draw;
    unit_or_unchanged(Vec2::new(x + SERVE_X_BIAS, y))
}

/// Seeded PCG generator (deterministic per seed)
#[derive(Debug, Clone)]
pub struct SeededServe {
    seed: u64,
    rng: Pcg32,
}

impl SeededServe {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed from the thread RNG
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl ServeSource for SeededServe {
    fn draw(&mut self) -> (f32, f32) {
        (self.rng.random::<f32>(), self.rng.random::<f32>())
    }
}

/// Replays a fixed list of draws, cycling when it runs out
#[derive(Debug, Clone)]
pub struct FixedServe {
    draws: Vec<(f32, f32)>,
    next: usize,
}

impl FixedServe {
    pub fn new(draws: Vec<(f32, f32)>) -> Self {
        Self { draws, next: 0 }
    }

    /// Always draws the same pair
    pub fn constant(x: f32, y: f32) -> Self {
        Self::new(vec![(x, y)])
    }
}

impl ServeSource for FixedServe {
    fn draw(&mut self) -> (f32, f32) {
        if self.draws.is_empty() {
            return (0.0, 0.0);
        }
        let draw = self.draws[self.next % self.draws.len()];
        self.next += 1;
        draw
    }
}

impl<S: ServeSource + ?Sized> ServeSource for Box<S> {
    fn draw(&mut self) -> (f32, f32) {
        (**self).draw()
    }
}
