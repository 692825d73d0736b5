//! Simulation context implementing RaceContext for reproducible races.

use hippodrome_env::RaceContext;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

/// Simulation context backed by a virtual clock and a seeded RNG.
///
/// - `sleep` advances the virtual clock instead of blocking
/// - every draw comes from `ChaCha8Rng::seed_from_u64(seed)`
#[derive(Debug, Clone)]
pub struct SimContext {
    /// Master seed for this race
    seed: u64,

    /// Current virtual time since race start
    virtual_time: Duration,

    /// Deterministic RNG for horse steps
    rng: ChaCha8Rng,
}

impl SimContext {
    /// Creates a new SimContext with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            virtual_time: Duration::ZERO,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Advances virtual time by the given duration.
    pub fn advance_time(&mut self, duration: Duration) {
        self.virtual_time += duration;
    }
}

// Draws go through the blanket `RandomSource` impl for `Rng`.
impl RngCore for SimContext {
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

impl RaceContext for SimContext {
    fn now(&self) -> Duration {
        self.virtual_time
    }

    fn sleep(&mut self, duration: Duration) {
        self.advance_time(duration);
    }

    fn seed(&self) -> u64 {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hippodrome_env::RandomSource;

    #[test]
    fn test_sim_context_time() {
        let mut ctx = SimContext::new(42);
        assert_eq!(ctx.now(), Duration::ZERO);

        ctx.sleep(Duration::from_secs(1));
        assert_eq!(ctx.now(), Duration::from_secs(1));

        ctx.advance_time(Duration::from_millis(500));
        assert_eq!(ctx.now(), Duration::from_millis(1500));
    }

    #[test]
    fn test_sim_context_deterministic_draws() {
        let mut ctx1 = SimContext::new(42);
        let mut ctx2 = SimContext::new(42);
        let mut ctx3 = SimContext::new(43);

        let a: Vec<f64> = (0..8).map(|_| ctx1.random_double(0.2, 0.9)).collect();
        let b: Vec<f64> = (0..8).map(|_| ctx2.random_double(0.2, 0.9)).collect();
        let c: Vec<f64> = (0..8).map(|_| ctx3.random_double(0.2, 0.9)).collect();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.iter().all(|x| (0.2..0.9).contains(x)));
    }

    #[test]
    fn test_sim_context_seed() {
        let ctx = SimContext::new(12345);
        assert_eq!(ctx.seed(), 12345);
    }
}
