//! Move-selection port shared by every difficulty tier.

use crate::games::tictactoe::{Board, Player, Position};
use rand::RngCore;

/// A policy that picks the AI's next move.
///
/// Strategies are stateless: everything they need arrives with the call.
/// Randomness is injected so callers control seeding.
pub trait MoveStrategy: std::fmt::Debug {
    /// Chooses a move for `ai` on `board`.
    ///
    /// Returns `None` only when the board has no empty square.
    fn choose_move(&self, board: &Board, ai: Player, rng: &mut dyn RngCore) -> Option<Position>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}
