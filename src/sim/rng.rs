//! Random source for serves and paddle spin
//!
//! The simulation only needs two small draws, so it asks for them through a
//! trait. Any `rand::Rng` works; tests plug in fixed sequences.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::{SERVE_DIRECTIONS, SPIN_STEPS};

/// Source of the variety used by [`tick`](super::tick)
pub trait ServeRng {
    /// Serve quadrant in `0..SERVE_DIRECTIONS`
    fn serve_direction(&mut self) -> u32;
    /// Spin step in `0..SPIN_STEPS`
    fn spin_step(&mut self) -> u32;
}

impl<R: Rng> ServeRng for R {
    fn serve_direction(&mut self) -> u32 {
        self.random_range(0..SERVE_DIRECTIONS)
    }

    fn spin_step(&mut self) -> u32 {
        self.random_range(0..SPIN_STEPS)
    }
}

/// Build the game RNG from a seed
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}
