//! Greedy one-ply play: win, block, then take the best free square.
//!
//! There is no recursive lookahead, so a fork beats it. That weakness is
//! part of the hard tier's character and must stay.

use super::MoveStrategy;
use crate::games::tictactoe::rules::winning_line;
use crate::games::tictactoe::{Board, Player, Position, Square};
use rand::RngCore;
use tracing::{debug, instrument};

/// Fallback order when nothing is won or blocked: center, corners, edges.
pub const PRIORITY_ORDER: [Position; 9] = [
    Position::Center,
    Position::TopLeft,
    Position::TopRight,
    Position::BottomLeft,
    Position::BottomRight,
    Position::TopCenter,
    Position::MiddleLeft,
    Position::MiddleRight,
    Position::BottomCenter,
];

/// Win if possible, otherwise block, otherwise follow [`PRIORITY_ORDER`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimalStrategy;

impl OptimalStrategy {
    /// First empty square (in index order) where `player` completes a line.
    pub fn completing_move(board: &Board, player: Player) -> Option<Position> {
        Position::valid_moves(board).into_iter().find(|&pos| {
            let mut trial = board.clone();
            trial.set(pos, Square::Occupied(player));
            winning_line(&trial).is_some_and(|(winner, _)| winner == player)
        })
    }
}

impl MoveStrategy for OptimalStrategy {
    #[instrument(skip(self, board, _rng))]
    fn choose_move(&self, board: &Board, ai: Player, _rng: &mut dyn RngCore) -> Option<Position> {
        if let Some(pos) = Self::completing_move(board, ai) {
            debug!(?pos, "Taking the win");
            return Some(pos);
        }

        if let Some(pos) = Self::completing_move(board, ai.opponent()) {
            debug!(?pos, "Blocking opponent");
            return Some(pos);
        }

        let choice = PRIORITY_ORDER
            .iter()
            .copied()
            .find(|pos| board.is_empty(*pos));
        debug!(?choice, "Priority square");
        choice
    }

    fn name(&self) -> &'static str {
        "optimal"
    }
}
