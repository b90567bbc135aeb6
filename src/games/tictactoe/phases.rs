//! Round lifecycle phases and terminal outcomes.

use super::rules::WinPattern;
use super::Player;
use serde::{Deserialize, Serialize};

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    Win {
        /// The player who completed the line.
        player: Player,
        /// The completed line.
        pattern: WinPattern,
    },
    /// Board filled with no line completed.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win { player, pattern } => {
                write!(f, "Player {} wins on {}", player, pattern)
            }
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Lifecycle of a game session.
///
/// `AwaitingStart -> Active -> Terminal`, and `Terminal -> Active` again on
/// a new round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// No round has been started yet.
    AwaitingStart,
    /// A round is in progress.
    Active,
    /// The round finished with the given outcome.
    Terminal(Outcome),
}

impl SessionState {
    /// Returns true while moves can be played.
    pub fn is_active(&self) -> bool {
        matches!(self, SessionState::Active)
    }

    /// Returns the outcome of a finished round.
    pub fn outcome(&self) -> Option<&Outcome> {
        match self {
            SessionState::Terminal(outcome) => Some(outcome),
            _ => None,
        }
    }
}
