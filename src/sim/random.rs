//! Random draws for spawn decisions
//!
//! The simulation only ever needs uniform floats in `[0, 1)`. Routing them
//! through [`RandomSource`] lets tests script exact outcomes.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of uniform draws in `[0, 1)`
pub trait RandomSource {
    fn next_f32(&mut self) -> f32;
}

impl RandomSource for Pcg32 {
    fn next_f32(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Seeded game RNG
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Replays a fixed list of draws, then a fallback value forever
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    draws: VecDeque<f32>,
    fallback: f32,
    /// Number of draws taken so far
    pub taken: usize,
}

impl ScriptedRandom {
    pub fn new(draws: impl IntoIterator<Item = f32>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            // 0.999 never passes any `< chance` gate below 1.0
            fallback: 0.999,
            taken: 0,
        }
    }

    /// Same value every draw
    pub fn constant(value: f32) -> Self {
        Self {
            draws: VecDeque::new(),
            fallback: value,
            taken: 0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f32(&mut self) -> f32 {
        self.taken += 1;
        self.draws.pop_front().unwrap_or(self.fallback)
    }
}
