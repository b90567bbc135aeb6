//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the session and the AI share one evaluator.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WIN_PATTERNS, WinPattern, check_winner, winning_line};

use super::Board;
use super::phases::Outcome;
use tracing::instrument;

/// Evaluates a board for a terminal outcome.
///
/// Returns the first completed line in scan order, then `Draw` for a full
/// board, and `None` while the game can continue.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Option<Outcome> {
    if let Some((player, pattern)) = winning_line(board) {
        return Some(Outcome::Win { player, pattern });
    }
    if is_full(board) {
        return Some(Outcome::Draw);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::super::{Player, Position, Square};
    use super::*;

    #[test]
    fn test_evaluate_in_progress() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_evaluate_win_carries_pattern() {
        let mut board = Board::new();
        for pos in [Position::TopCenter, Position::Center, Position::BottomCenter] {
            board.set(pos, Square::Occupied(Player::O));
        }
        assert_eq!(
            evaluate(&board),
            Some(Outcome::Win {
                player: Player::O,
                pattern: WIN_PATTERNS[4],
            })
        );
    }

    #[test]
    fn test_win_on_last_square_beats_draw() {
        // X O X / O X O / O X X: full board, X completes the main diagonal.
        #[rustfmt::skip]
        let marks = [
            Player::X, Player::O, Player::X,
            Player::O, Player::X, Player::O,
            Player::O, Player::X, Player::X,
        ];
        let board = Board::from_squares(marks.map(Square::Occupied));
        assert_eq!(
            evaluate(&board),
            Some(Outcome::Win {
                player: Player::X,
                pattern: WIN_PATTERNS[6],
            })
        );
    }
}
