//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the eight lines that win the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinPattern([Position; 3]);

impl WinPattern {
    /// The three positions of this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The three board indices of this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Returns true if the line passes through the given position.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

impl std::fmt::Display for WinPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.indices();
        write!(f, "[{}, {}, {}]", a, b, c)
    }
}

/// All winning lines in scan order: rows, then columns, then diagonals.
pub const WIN_PATTERNS: [WinPattern; 8] = [
    // Rows
    WinPattern([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    WinPattern([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    WinPattern([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    WinPattern([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    WinPattern([Position::TopCenter, Position::Center, Position::BottomCenter]),
    WinPattern([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    WinPattern([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinPattern([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Finds the first completed line in scan order.
///
/// If several lines are complete at once, the earliest one in
/// [`WIN_PATTERNS`] is reported.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Player, WinPattern)> {
    WIN_PATTERNS.iter().find_map(|pattern| {
        let [a, b, c] = pattern.positions();
        match board.get(a) {
            Square::Occupied(player)
                if board.get(b) == Square::Occupied(player)
                    && board.get(c) == Square::Occupied(player) =>
            {
                Some((player, *pattern))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}
