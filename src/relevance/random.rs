//! Random score floor sources
//!
//! The ranking inflates weak scores with a random floor so the demo list
//! reshuffles between queries. Sources sit behind a trait so tests and
//! reproducible demos can pin the value.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of integers for the score floor
pub trait RandomSource: Send {
    /// Uniform integer in `min..=max`
    fn next_int(&mut self, min: u32, max: u32) -> u32;
}

/// Thread-local RNG, the production source
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_int(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        rand::thread_rng().gen_range(min..=max)
    }
}

/// Seeded RNG for repeatable runs
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_int(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..=max)
    }
}

/// Always yields the same value, clamped into the requested range
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub u32);

impl RandomSource for FixedRandom {
    fn next_int(&mut self, min: u32, max: u32) -> u32 {
        self.0.clamp(min, max.max(min))
    }
}
