//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use super::position::Position;
use super::rules::WinPattern;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Squares are stored in row-major order, so index `i` lives at
/// row `i / 3`, column `i % 3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from explicit squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Overwrites the square at the given position without any rule checks.
    ///
    /// Used for hypothetical boards (AI lookahead, test fixtures). Live play
    /// goes through [`Board::place`].
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Places a mark on an empty square.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::CellOccupied`] if the square already holds a mark.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, player: Player) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }
        self.set(pos, Square::Occupied(player));
        Ok(())
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Clears all nine squares.
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based cell number.
    pub fn display(&self) -> String {
        Self::render(|pos| self.symbol(pos), "-+-+-")
    }

    /// Like [`Board::display`], with the marks on `line` bracketed.
    pub fn display_with_line(&self, line: Option<WinPattern>) -> String {
        Self::render(
            |pos| match line {
                Some(line) if line.contains(pos) => format!("[{}]", self.symbol(pos)),
                _ => format!(" {} ", self.symbol(pos)),
            },
            "---+---+---",
        )
    }

    fn symbol(&self, pos: Position) -> String {
        match self.get(pos).player() {
            Some(player) => player.to_string(),
            None => (pos.to_index() + 1).to_string(),
        }
    }

    fn render(cell: impl Fn(Position) -> String, divider: &str) -> String {
        Position::ALL
            .chunks(3)
            .map(|row| row.iter().map(|pos| cell(*pos)).collect::<Vec<_>>().join("|"))
            .collect::<Vec<_>>()
            .join(format!("\n{divider}\n").as_str())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
