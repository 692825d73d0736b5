//! Race configuration.

use hippodrome_core::{HorseSpec, RaceError, Roster};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Steps in a race when none are configured.
pub const DEFAULT_STEPS: u32 = 100;

/// Pause between steps when none is configured.
pub const DEFAULT_TICK: Duration = Duration::from_millis(200);

/// Errors raised while assembling a race from outside input.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Roster file could not be read
    #[error("Failed to read roster {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Roster file is not valid roster JSON
    #[error("Invalid roster JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Roster parsed but describes an invalid field
    #[error("{0}")]
    Race(#[from] RaceError),
}

/// Configuration for a race run.
#[derive(Debug, Clone)]
pub struct RaceConfig {
    /// Master seed for determinism (0 = unseeded, wall-clock race)
    pub seed: u64,

    /// Number of steps every horse takes
    pub steps: u32,

    /// Pause between steps
    pub tick: Duration,

    /// Field of horses
    pub roster: Roster,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            steps: DEFAULT_STEPS,
            tick: DEFAULT_TICK,
            roster: classic_roster(),
        }
    }
}

impl RaceConfig {
    /// Sets the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the number of steps.
    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }

    /// Sets the pause between steps.
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    /// Replaces the field of horses.
    pub fn with_roster(mut self, roster: Roster) -> Self {
        self.roster = roster;
        self
    }

    /// Reads a JSON roster file.
    ///
    /// Only the file format is checked here; horse validation happens when
    /// the hippodrome is built.
    pub fn load_roster(path: impl AsRef<Path>) -> Result<Roster, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// The seven-horse field raced when no roster is given.
pub fn classic_roster() -> Roster {
    Roster::new(vec![
        HorseSpec::new("Bucephalus", 2.4),
        HorseSpec::new("Ace of Spades", 2.5),
        HorseSpec::new("Zephyr", 2.6),
        HorseSpec::new("Blaze", 2.7),
        HorseSpec::new("Lobster", 2.8),
        HorseSpec::new("Pegasus", 2.9),
        HorseSpec::new("Cherry", 3.0),
    ])
}
