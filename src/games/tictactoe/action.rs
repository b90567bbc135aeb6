//! Moves and the reasons a move can be refused.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// A rejected move.
///
/// Every variant is recoverable: the board, move counter and session
/// state are left exactly as they were before the attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not address a cell (must be 0-8).
    #[display("Position {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(Position),

    /// No round is active (not started yet, or already finished).
    #[display("No round is active")]
    NotActive,

    /// The AI has decided its move and it has not been applied yet.
    #[display("Waiting for the AI to move")]
    AiTurnPending,

    /// The pending AI move belongs to a round that has been replaced.
    #[display("AI move belongs to a previous round and was dropped")]
    StaleAiMove,
}

impl std::error::Error for MoveError {}
