//! AI opponents.
//!
//! Three tiers, each a [`MoveStrategy`]:
//!
//! - **Easy**: [`RandomStrategy`]
//! - **Medium**: [`MixedStrategy`] (optimal 70% of the time)
//! - **Hard**: [`OptimalStrategy`] (greedy one-ply lookahead)

mod difficulty;
mod mixed;
mod optimal;
mod random;
mod strategy;

pub use difficulty::Difficulty;
pub use mixed::{DEFAULT_OPTIMAL_PROBABILITY, MixedStrategy};
pub use optimal::{OptimalStrategy, PRIORITY_ORDER};
pub use random::RandomStrategy;
pub use strategy::MoveStrategy;
