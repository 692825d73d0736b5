//! The race container.

use crate::error::RaceError;
use crate::horse::Horse;
use crate::roster::Roster;
use hippodrome_env::RandomSource;
use tracing::info;

/// A fixed, ordered, non-empty field of horses.
///
/// Membership is settled at construction. Callers see the field as a
/// borrowed slice; horses only change through [`Hippodrome::advance`].
#[derive(Debug, Clone, PartialEq)]
pub struct Hippodrome {
    /// Never empty
    horses: Vec<Horse>,
}

impl Hippodrome {
    /// Creates a hippodrome that races `horses` in the given order.
    pub fn new(horses: Vec<Horse>) -> Result<Self, RaceError> {
        if horses.is_empty() {
            info!("Horses list is empty.");
            return Err(RaceError::EmptyHorses);
        }

        info!("Creation of Hippodrome, horses [{}]", horses.len());
        Ok(Self { horses })
    }

    /// Builds every horse of a roster in order, then the hippodrome.
    ///
    /// A roster without a `horses` field fails with
    /// [`RaceError::NullHorses`]; otherwise the first invalid horse wins.
    pub fn from_roster(roster: Roster) -> Result<Self, RaceError> {
        let Some(specs) = roster.horses else {
            info!("Horses list is null.");
            return Err(RaceError::NullHorses);
        };

        let horses = specs
            .into_iter()
            .map(Horse::from_spec)
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(horses)
    }

    /// Returns the horses in insertion order.
    pub fn horses(&self) -> &[Horse] {
        &self.horses
    }

    /// Advances every horse exactly once, in stored order.
    pub fn advance<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        for horse in &mut self.horses {
            horse.advance(rng);
        }
    }

    /// Returns the horse with the greatest distance.
    ///
    /// Ties go to the horse that comes first in stored order.
    pub fn winner(&self) -> &Horse {
        // Non-empty by construction, so the first element always exists.
        let mut leader = &self.horses[0];
        for horse in &self.horses[1..] {
            if horse.distance() > leader.distance() {
                leader = horse;
            }
        }
        leader
    }

    /// Returns the horses ordered by distance, furthest first.
    ///
    /// The sort is stable: horses with equal distance keep stored order, so
    /// `standings()[0]` is always [`Hippodrome::winner`].
    pub fn standings(&self) -> Vec<&Horse> {
        let mut order: Vec<&Horse> = self.horses.iter().collect();
        order.sort_by(|a, b| b.distance().total_cmp(&a.distance()));
        order
    }
}
