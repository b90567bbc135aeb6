mod action;
mod phases;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use phases::{Outcome, SessionState};
pub use position::Position;
pub use rules::{WIN_PATTERNS, WinPattern, evaluate};
pub use types::{Board, Player, Square};
