//! Core environment context trait for a running race.

use crate::RandomSource;
use std::time::Duration;

/// The central interface for environment interaction during a race.
///
/// This trait abstracts the "real world" so that the race driver can run
/// against wall-clock time and OS entropy, or against a seeded simulation.
///
/// # Implementations
///
/// - **Production**: `SystemContext` - wraps `std::thread::sleep`, `StdRng::from_entropy`
/// - **Simulation**: `SimContext` - virtual clock, `ChaCha8Rng(seed)`
///
/// # Determinism
///
/// A context is also the race's [`RandomSource`], so a seeded context fixes
/// every draw of every horse.
pub trait RaceContext: RandomSource {
    /// Returns the monotonic time since context creation.
    ///
    /// In simulation, this is the virtual clock time.
    fn now(&self) -> Duration;

    /// Pauses between race steps.
    ///
    /// In production: blocks the thread.
    /// In simulation: advances the virtual clock.
    fn sleep(&mut self, duration: Duration);

    /// Returns the context's seed (for logging/debugging).
    ///
    /// In production, returns 0 (not seeded).
    fn seed(&self) -> u64;
}
