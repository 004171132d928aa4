//! Game status as seen from a single history step.

use super::Player;
use serde::{Deserialize, Serialize};

/// Coarse phase of a position.
///
/// `Won` and `Drawn` are terminal for moves; history can still be
/// revisited from any phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Moves can still be made.
    InProgress,
    /// A player completed a line.
    Won,
    /// The board is full with no line.
    Drawn,
}

/// Summary of the displayed position.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum GameStatus {
    /// Player completed a line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Game ended in a draw.
    #[display("Draw")]
    Draw,
    /// Game continues with this player to move.
    #[display("Next player: {}", _0)]
    NextToMove(Player),
}

impl GameStatus {
    /// Returns the phase this status belongs to.
    pub fn phase(&self) -> Phase {
        match self {
            GameStatus::Winner(_) => Phase::Won,
            GameStatus::Draw => Phase::Drawn,
            GameStatus::NextToMove(_) => Phase::InProgress,
        }
    }

    /// Returns true once no further moves are accepted.
    pub fn is_terminal(&self) -> bool {
        self.phase() != Phase::InProgress
    }
}
