//! Per-round results fed into the statistics.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::games::tictactoe::{Outcome, Player};

/// Who took a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameWinner {
    /// X completed a line.
    X,
    /// O completed a line.
    O,
    /// Nobody did.
    Draw,
}

impl From<Player> for GameWinner {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Self::X,
            Player::O => Self::O,
        }
    }
}

impl From<&Outcome> for GameWinner {
    fn from(outcome: &Outcome) -> Self {
        outcome.winner().map_or(Self::Draw, Self::from)
    }
}

/// Immutable summary of one completed round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct GameRecord {
    winner: GameWinner,
    move_count: u32,
    duration_millis: u64,
}
