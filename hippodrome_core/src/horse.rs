//! A single race participant.
//!
//! A horse's identity (name) and speed are fixed when it is built; only its
//! distance changes, and only upward. Every step multiplies the speed by a
//! factor drawn uniformly from `[MIN_STEP_FACTOR, MAX_STEP_FACTOR)`.

use crate::error::RaceError;
use crate::roster::HorseSpec;
use hippodrome_env::RandomSource;
use tracing::debug;

/// Lower bound (inclusive) of the per-step speed multiplier.
pub const MIN_STEP_FACTOR: f64 = 0.2;

/// Upper bound (exclusive) of the per-step speed multiplier.
pub const MAX_STEP_FACTOR: f64 = 0.9;

/// A named participant with a fixed speed and a cumulative distance.
#[derive(Debug, Clone, PartialEq)]
pub struct Horse {
    name: String,
    speed: f64,
    distance: f64,
}

impl Horse {
    /// Creates a horse at the starting line (distance 0).
    pub fn new(name: impl Into<String>, speed: f64) -> Result<Self, RaceError> {
        Self::with_distance(name, speed, 0.0)
    }

    /// Creates a horse that has already covered `distance`.
    pub fn with_distance(
        name: impl Into<String>,
        speed: f64,
        distance: f64,
    ) -> Result<Self, RaceError> {
        Self::build(Some(name.into()), speed, distance)
    }

    /// Creates a horse from a roster entry, where the name may be absent.
    pub fn from_spec(spec: HorseSpec) -> Result<Self, RaceError> {
        Self::build(spec.name, spec.speed, spec.distance.unwrap_or(0.0))
    }

    fn build(name: Option<String>, speed: f64, distance: f64) -> Result<Self, RaceError> {
        let name = validate(name, speed, distance).map_err(|e| {
            debug!("Rejected horse, speed [{}], distance [{}]: {}", speed, distance, e);
            e
        })?;

        debug!(
            "Creation of Horse, name [{}], speed [{}], distance [{}]",
            name, speed, distance
        );

        Ok(Self {
            name,
            speed,
            distance,
        })
    }

    /// Returns the horse's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the horse's speed.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Returns the distance covered so far.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Advances the horse by one step.
    ///
    /// Draws one factor `r` from `[MIN_STEP_FACTOR, MAX_STEP_FACTOR)` and
    /// adds `speed * r` to the distance.
    pub fn advance<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        let factor = rng.random_double(MIN_STEP_FACTOR, MAX_STEP_FACTOR);
        self.distance += self.speed * factor;
    }
}

/// Checks construction arguments, reporting the first violation.
///
/// Order is part of the contract: null name, blank name, negative speed,
/// negative distance, then the finiteness checks.
fn validate(name: Option<String>, speed: f64, distance: f64) -> Result<String, RaceError> {
    let name = name.ok_or(RaceError::NullName)?;
    if name.trim().is_empty() {
        return Err(RaceError::BlankName);
    }
    if speed < 0.0 {
        return Err(RaceError::NegativeSpeed);
    }
    if distance < 0.0 {
        return Err(RaceError::NegativeDistance);
    }
    if !speed.is_finite() {
        return Err(RaceError::NonFiniteSpeed);
    }
    if !distance.is_finite() {
        return Err(RaceError::NonFiniteDistance);
    }
    Ok(name)
}
