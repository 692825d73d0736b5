//! # Hippodrome Core
//!
//! The race domain: horses with a fixed speed and a growing distance, and
//! the hippodrome that advances them together and names the leader.
//!
//! ## Modules
//!
//! - `horse` - A single participant and its validated construction
//! - `hippodrome` - The fixed, non-empty field of horses
//! - `roster` - Serde-loadable descriptions of a field
//! - `error` - Validation failures
//!
//! Randomness is never hidden: every advance takes a
//! [`RandomSource`](hippodrome_env::RandomSource), so a race is exactly as
//! reproducible as the source handed to it.

pub mod error;
pub mod hippodrome;
pub mod horse;
pub mod roster;

#[cfg(test)]
pub(crate) mod testing;

pub use error::RaceError;
pub use hippodrome::Hippodrome;
pub use horse::{Horse, MAX_STEP_FACTOR, MIN_STEP_FACTOR};
pub use roster::{HorseSpec, Roster};
