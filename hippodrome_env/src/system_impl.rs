//! Production implementation of RaceContext.

use crate::RaceContext;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::time::{Duration, Instant};

/// Production context backed by the system clock and OS entropy.
pub struct SystemContext {
    /// Start time for monotonic duration calculations
    start: Instant,

    /// RNG seeded once from the OS
    rng: StdRng,
}

impl SystemContext {
    /// Creates a new SystemContext.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for SystemContext {
    fn default() -> Self {
        Self::new()
    }
}

// Draws go through the blanket `RandomSource` impl for `Rng`.
impl RngCore for SystemContext {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

impl RaceContext for SystemContext {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }

    fn sleep(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }

    fn seed(&self) -> u64 {
        // Production is not seeded
        0
    }
}
