//! Board snapshots recorded by the engine.

use super::{Board, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One snapshot in the move history.
///
/// Entries are created by the engine and never modified afterwards;
/// only getters are exposed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Board after this move.
    board: Board,
    /// Number of moves played to reach this board (0 for game start).
    move_number: usize,
    /// Cell filled by this move, `None` for game start.
    last_played: Option<Position>,
}

impl HistoryEntry {
    /// The empty board at move 0.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            move_number: 0,
            last_played: None,
        }
    }

    pub(crate) fn after_move(board: Board, move_number: usize, played: Position) -> Self {
        Self {
            board,
            move_number,
            last_played: Some(played),
        }
    }
}
