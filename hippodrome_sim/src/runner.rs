//! Race runner - advances a hippodrome step by step and reports the result.

use crate::config::{RaceConfig, DEFAULT_STEPS, DEFAULT_TICK};
use hippodrome_core::{Hippodrome, RaceError};
use hippodrome_env::RaceContext;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

/// Final position of one horse.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Standing {
    /// 1-based finishing place
    pub place: usize,
    pub name: String,
    pub speed: f64,
    pub distance: f64,
}

/// Results from running a race.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaceResult {
    /// Seed of the context (0 when unseeded)
    pub seed: u64,

    /// Steps executed
    pub steps: u32,

    /// Context time spent running, in seconds
    pub elapsed_secs: f64,

    /// Name of the leading horse
    pub winner: String,

    /// Every horse, furthest first
    pub standings: Vec<Standing>,
}

/// Runs a race against a context.
pub struct RaceRunner<C> {
    context: C,
    hippodrome: Hippodrome,
    steps: u32,
    tick: Duration,
}

impl<C: RaceContext> RaceRunner<C> {
    /// Creates a runner with the default step count and tick.
    pub fn new(context: C, hippodrome: Hippodrome) -> Self {
        Self {
            context,
            hippodrome,
            steps: DEFAULT_STEPS,
            tick: DEFAULT_TICK,
        }
    }

    /// Builds the hippodrome from the config's roster.
    pub fn from_config(context: C, config: &RaceConfig) -> Result<Self, RaceError> {
        let hippodrome = Hippodrome::from_roster(config.roster.clone())?;
        Ok(Self::new(context, hippodrome)
            .with_steps(config.steps)
            .with_tick(config.tick))
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

    /// Returns the hippodrome in its current state.
    pub fn hippodrome(&self) -> &Hippodrome {
        &self.hippodrome
    }

    /// Returns the context.
    pub fn context(&self) -> &C {
        &self.context
    }

    /// Runs the race without observing intermediate steps.
    pub fn run(&mut self) -> RaceResult {
        self.run_with(|_, _| {})
    }

    /// Runs the race, calling `on_step` after every advance.
    ///
    /// Each step is: advance all horses, `on_step(step, hippodrome)`, then
    /// sleep for one tick.
    pub fn run_with<F>(&mut self, mut on_step: F) -> RaceResult
    where
        F: FnMut(u32, &Hippodrome),
    {
        info!(
            "Start of race. Number of participants: {} (seed={})",
            self.hippodrome.horses().len(),
            self.context.seed()
        );
        let started = self.context.now();

        for step in 1..=self.steps {
            self.hippodrome.advance(&mut self.context);
            on_step(step, &self.hippodrome);

            debug!(
                "  step={} | leader={} ({:.2})",
                step,
                self.hippodrome.winner().name(),
                self.hippodrome.winner().distance()
            );

            self.context.sleep(self.tick);
        }

        let winner = self.hippodrome.winner();
        info!("End of race. Winner: {}", winner.name());

        RaceResult {
            seed: self.context.seed(),
            steps: self.steps,
            elapsed_secs: (self.context.now() - started).as_secs_f64(),
            winner: winner.name().to_string(),
            standings: self
                .hippodrome
                .standings()
                .into_iter()
                .enumerate()
                .map(|(i, horse)| Standing {
                    place: i + 1,
                    name: horse.name().to_string(),
                    speed: horse.speed(),
                    distance: horse.distance(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::SimContext;
    use approx::assert_relative_eq;
    use hippodrome_core::{Horse, HorseSpec, Roster};

    fn runner(seed: u64) -> RaceRunner<SimContext> {
        let config = RaceConfig::default().with_seed(seed);
        RaceRunner::from_config(SimContext::new(seed), &config).unwrap()
    }

    #[test]
    fn test_run_reports_all_horses() {
        let result = runner(42).run();

        assert_eq!(result.seed, 42);
        assert_eq!(result.steps, 100);
        assert_eq!(result.standings.len(), 7);
        assert_eq!(result.standings[0].name, result.winner);
        assert_eq!(
            result.standings.iter().map(|s| s.place).collect::<Vec<_>>(),
            (1..=7).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_new_uses_default_steps_and_tick() {
        let hippodrome = Hippodrome::new(vec![Horse::new("Solo", 1.0).unwrap()]).unwrap();
        let mut runner = RaceRunner::new(SimContext::new(4), hippodrome);
        let result = runner.run();

        assert_eq!(result.steps, DEFAULT_STEPS);
        assert_eq!(runner.context().now(), DEFAULT_TICK * DEFAULT_STEPS);
    }

    #[test]
    fn test_elapsed_is_virtual_ticks() {
        let mut runner = runner(1).with_steps(10).with_tick(Duration::from_millis(200));
        let result = runner.run();

        assert_relative_eq!(result.elapsed_secs, 2.0, epsilon = 1e-9);
        assert_eq!(runner.context().now(), Duration::from_secs(2));
    }

    #[test]
    fn test_on_step_called_every_step() {
        let mut runner = runner(3).with_steps(5);
        let mut seen = Vec::new();
        let mut last_total = 0.0;

        runner.run_with(|step, hippodrome| {
            let total: f64 = hippodrome.horses().iter().map(Horse::distance).sum();
            assert!(total > last_total);
            last_total = total;
            seen.push(step);
        });

        assert_eq!(seen, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_distances_stay_within_step_bounds() {
        let steps = 50;
        let mut runner = runner(9).with_steps(steps);
        runner.run();

        for horse in runner.hippodrome().horses() {
            let lo = horse.speed() * 0.2 * steps as f64;
            let hi = horse.speed() * 0.9 * steps as f64;
            assert!(horse.distance() >= lo - 1e-9, "{} too slow", horse.name());
            assert!(horse.distance() < hi, "{} too fast", horse.name());
        }
    }

    #[test]
    fn test_zero_steps_leaves_field_untouched() {
        let roster = Roster::new(vec![
            HorseSpec::new("A", 1.0).with_distance(2.0),
            HorseSpec::new("B", 1.0).with_distance(5.0),
        ]);
        let config = RaceConfig::default().with_steps(0).with_roster(roster);
        let result = RaceRunner::from_config(SimContext::new(0), &config)
            .unwrap()
            .run();

        assert_eq!(result.winner, "B");
        assert_eq!(result.elapsed_secs, 0.0);
    }

    #[test]
    fn test_invalid_roster_rejected() {
        let config = RaceConfig::default().with_roster(Roster::default());
        let err = RaceRunner::from_config(SimContext::new(1), &config).err();
        assert_eq!(err, Some(RaceError::NullHorses));
    }
}
