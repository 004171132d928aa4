//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning lines, in evaluation order.
///
/// Rows top-to-bottom, then columns left-to-right, then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Three cells holding the same mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    player: Player,
    cells: [Position; 3],
}

impl WinningLine {
    /// The player owning the line.
    pub fn player(&self) -> Player {
        self.player
    }

    /// The three board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.cells.map(Position::to_index)
    }
}

/// Finds the first winning line on the board.
///
/// Lines are checked in [`LINES`] order and the first match is returned,
/// so the result is deterministic even on boards with several lines.
#[instrument(skip(board))]
pub fn evaluate_winner(board: &Board) -> Option<WinningLine> {
    LINES.into_iter().find_map(|cells @ [a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(player) if sq == board.get(b) && sq == board.get(c) => {
                Some(WinningLine { player, cells })
            }
            _ => None,
        }
    })
}
