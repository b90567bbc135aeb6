//! Medium tier: mostly sharp, sometimes careless.

use super::{MoveStrategy, OptimalStrategy, RandomStrategy};
use crate::games::tictactoe::{Board, Player, Position};
use rand::{Rng, RngCore};
use tracing::{debug, instrument};

/// Probability that the medium tier plays the optimal move.
pub const DEFAULT_OPTIMAL_PROBABILITY: f64 = 0.7;

/// Delegates to [`OptimalStrategy`] with a fixed probability, otherwise
/// to [`RandomStrategy`].
#[derive(Debug, Clone, Copy)]
pub struct MixedStrategy {
    optimal_probability: f64,
}

impl MixedStrategy {
    /// Creates a mixed strategy; the probability is clamped to `0.0..=1.0`
    /// and NaN falls back to [`DEFAULT_OPTIMAL_PROBABILITY`].
    pub fn new(optimal_probability: f64) -> Self {
        let optimal_probability = if optimal_probability.is_nan() {
            DEFAULT_OPTIMAL_PROBABILITY
        } else {
            optimal_probability.clamp(0.0, 1.0)
        };
        Self {
            optimal_probability,
        }
    }

    /// Probability of delegating to the optimal policy.
    pub fn optimal_probability(&self) -> f64 {
        self.optimal_probability
    }
}

impl Default for MixedStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_OPTIMAL_PROBABILITY)
    }
}

impl MoveStrategy for MixedStrategy {
    #[instrument(skip(self, board, rng))]
    fn choose_move(&self, board: &Board, ai: Player, rng: &mut dyn RngCore) -> Option<Position> {
        if rng.random_bool(self.optimal_probability) {
            debug!("Mixed strategy delegating to optimal");
            OptimalStrategy.choose_move(board, ai, rng)
        } else {
            debug!("Mixed strategy delegating to random");
            RandomStrategy.choose_move(board, ai, rng)
        }
    }

    fn name(&self) -> &'static str {
        "mixed"
    }
}
