//! Uniform random play.

use super::MoveStrategy;
use crate::games::tictactoe::{Board, Player, Position};
use rand::RngCore;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Picks uniformly among the empty squares.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl MoveStrategy for RandomStrategy {
    #[instrument(skip(self, board, rng))]
    fn choose_move(&self, board: &Board, ai: Player, rng: &mut dyn RngCore) -> Option<Position> {
        let choice = Position::valid_moves(board).choose(rng).copied();
        debug!(?ai, ?choice, "Random strategy picked");
        choice
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
