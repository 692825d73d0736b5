//! Hippodrome Environment Abstraction Layer
//!
//! This crate provides the seams through which a race touches the outside
//! world, so the same race can run in **Production** (OS entropy, wall clock)
//! and **Simulation** (seeded RNG, virtual clock).
//!
//! # Core Concept
//!
//! A race has exactly two sources of non-determinism:
//! - Randomness (the per-step draw of every horse)
//! - Time (the pause between rendered steps)
//!
//! Both are passed in explicitly. Nothing in the domain crate reaches for a
//! global RNG or sleeps on its own.
//!
//! # Example
//!
//! ```ignore
//! use hippodrome_env::{RaceContext, SystemContext};
//!
//! fn drive<Ctx: RaceContext>(ctx: &mut Ctx, hippodrome: &mut Hippodrome) {
//!     for _ in 0..100 {
//!         hippodrome.advance(ctx);
//!         ctx.sleep(Duration::from_millis(200));
//!     }
//! }
//! ```

mod context;
mod random;
mod system_impl;

pub use context::RaceContext;
pub use random::RandomSource;
pub use system_impl::SystemContext;
