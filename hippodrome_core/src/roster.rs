//! Serde-loadable race fields.
//!
//! A roster is how a field of horses arrives from outside the program,
//! typically as JSON. Fields that may be missing in the input are `Option`s
//! here, and [`Hippodrome::from_roster`](crate::Hippodrome::from_roster)
//! decides what a missing value means.

use serde::{Deserialize, Serialize};

/// Description of one horse before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorseSpec {
    /// Horse name (absent or `null` is rejected)
    #[serde(default)]
    pub name: Option<String>,

    /// Speed, must be non-negative
    pub speed: f64,

    /// Starting distance, 0 when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl HorseSpec {
    /// Creates a spec for a horse starting at distance 0.
    pub fn new(name: impl Into<String>, speed: f64) -> Self {
        Self {
            name: Some(name.into()),
            speed,
            distance: None,
        }
    }

    /// Sets the starting distance.
    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = Some(distance);
        self
    }
}

/// An ordered field of horse descriptions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub horses: Option<Vec<HorseSpec>>,
}

impl Roster {
    /// Creates a roster from the given specs.
    pub fn new(horses: Vec<HorseSpec>) -> Self {
        Self {
            horses: Some(horses),
        }
    }

    /// Number of horses listed, 0 when the field is absent.
    pub fn len(&self) -> usize {
        self.horses.as_ref().map_or(0, Vec::len)
    }

    /// Returns true if no horses are listed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
