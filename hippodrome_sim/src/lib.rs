//! Hippodrome Race Driver
//!
//! This crate drives a [`Hippodrome`](hippodrome_core::Hippodrome) through a
//! race: advance every horse, show the track, pause, repeat, then name the
//! winner.
//!
//! # Core Principle: Seeded Races
//!
//! The only entropy a race consumes comes from its context:
//! - **Randomness**: every draw of every horse comes from one RNG
//! - **Time**: the pause between steps goes through the context clock
//!
//! With a [`SimContext`] both are derived from a single 64-bit seed, so any
//! race can be replayed exactly from its seed.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                     RaceRunner                       │
//! │  ┌────────────────────┐     ┌─────────────────────┐  │
//! │  │ RaceContext        │     │ Hippodrome          │  │
//! │  │ (SimContext or     │────►│  Horse  Horse  ...  │  │
//! │  │  SystemContext)    │ RNG └─────────────────────┘  │
//! │  └────────────────────┘                              │
//! │        │ sleep(tick)            │ render_track       │
//! │        ▼                        ▼                    │
//! │   virtual / wall clock       console                 │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use hippodrome_sim::{RaceConfig, RaceRunner, SimContext};
//!
//! let config = RaceConfig::default().with_seed(7);
//! let mut runner = RaceRunner::from_config(SimContext::new(config.seed), &config)?;
//! let result = runner.run();
//! println!("Winner is {}!", result.winner);
//! ```

mod config;
mod context;
mod display;
mod runner;

pub use config::{classic_roster, ConfigError, RaceConfig, DEFAULT_STEPS, DEFAULT_TICK};
pub use context::SimContext;
pub use display::{announce_winner, render_standings, render_track, TRACK_WIDTH};
pub use runner::{RaceResult, RaceRunner, Standing};
