//! The random draw capability.

use rand::Rng;

/// A source of uniformly distributed real numbers.
///
/// Every stochastic step in a race goes through this trait. Production and
/// simulation pass a real RNG (any [`rand::Rng`] qualifies via the blanket
/// impl below); tests pass a fixed value.
pub trait RandomSource {
    /// Returns a value drawn uniformly from the half-open range `[min, max)`.
    ///
    /// Callers guarantee `min < max`.
    fn random_double(&mut self, min: f64, max: f64) -> f64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn random_double(&mut self, min: f64, max: f64) -> f64 {
        self.gen_range(min..max)
    }
}
