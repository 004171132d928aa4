//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game, identified by the mark they place.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (always moves on even steps, so goes first).
    X,
    /// Player O.
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

    /// Returns the player to move once `step` moves have been played.
    ///
    /// X moves on even steps and O on odd ones, so the mover is always a
    /// function of the step index alone.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Player::X } else { Player::O }
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

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns the number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Finds the square that is occupied here but empty on `previous`.
    ///
    /// Returns the first such position in board order, or `None` when
    /// nothing was placed.
    #[instrument(skip(self, previous))]
    pub fn placed_since(&self, previous: &Board) -> Option<Position> {
        Position::ALL
            .into_iter()
            .find(|pos| !self.is_empty(*pos) && previous.is_empty(*pos))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_step_alternates() {
        assert_eq!(Player::for_step(0), Player::X);
        assert_eq!(Player::for_step(1), Player::O);
        assert_eq!(Player::for_step(8), Player::X);
        assert_eq!(Player::for_step(7).opponent(), Player::for_step(8));
    }

    #[test]
    fn test_placed_since_finds_new_mark() {
        let before = Board::new();
        let mut after = before.clone();
        after.set(Position::MiddleRight, Square::Occupied(Player::X));

        assert_eq!(after.placed_since(&before), Some(Position::MiddleRight));
        assert_eq!(before.placed_since(&after), None);
        assert_eq!(after.placed_since(&after), None);
    }

    #[test]
    fn test_occupied_counts_marks() {
        let mut board = Board::new();
        assert_eq!(board.occupied(), 0);
        for pos in Position::ALL {
            board.set(pos, Square::Occupied(Player::O));
        }
        assert_eq!(board.occupied(), 9);
    }
}
