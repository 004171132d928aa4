//! View model for front ends.
//!
//! Everything here is derived from engine snapshots and never feeds back
//! into the engine: the move list, its sort order, the per-entry move
//! descriptions and the cells to highlight.

use super::rules;
use super::{Board, GameEngine, HistoryEntry};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Display order of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest move first.
    #[default]
    #[serde(alias = "ascending")]
    Ascend,
    /// Newest move first.
    #[serde(alias = "descending")]
    Descend,
}

impl SortOrder {
    /// Flips the order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascend => Self::Descend,
            Self::Descend => Self::Ascend,
        }
    }

    /// Returns the display label for this order.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascend => "ascend",
            Self::Descend => "descend",
        }
    }
}

/// Human-readable description of a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum MoveDescription {
    /// The empty starting board.
    #[display("Go to game start")]
    GameStart,
    /// A move, with the zero-based row and column it was played at.
    #[display("Go to move #{} ({}, {})", number, row, col)]
    Move {
        /// Move number.
        number: usize,
        /// Row of the placed mark.
        row: usize,
        /// Column of the placed mark.
        col: usize,
    },
}

impl MoveDescription {
    /// Describes `entry` by diffing its board against `previous`.
    ///
    /// Entries without a predecessor, or whose board adds nothing to it,
    /// are described as the game start.
    #[instrument(skip(entry, previous))]
    pub fn between(entry: &HistoryEntry, previous: Option<&HistoryEntry>) -> Self {
        previous
            .and_then(|prev| entry.board().placed_since(prev.board()))
            .map_or(Self::GameStart, |pos| Self::Move {
                number: *entry.move_number(),
                row: pos.row(),
                col: pos.col(),
            })
    }
}

/// One row of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveListItem {
    /// History index to jump to when the item is chosen.
    pub step: usize,
    /// Text for the item.
    pub description: MoveDescription,
    /// Whether this is the displayed step.
    pub is_current: bool,
}

/// Builds the move list of `engine` in the given order.
#[instrument(skip(engine), fields(len = engine.history().len()))]
pub fn move_list(engine: &GameEngine, order: SortOrder) -> Vec<MoveListItem> {
    let history = engine.history();
    let mut items: Vec<MoveListItem> = history
        .iter()
        .enumerate()
        .map(|(step, entry)| MoveListItem {
            step,
            description: MoveDescription::between(entry, step.checked_sub(1).map(|p| &history[p])),
            is_current: step == engine.current_step(),
        })
        .collect();

    if order == SortOrder::Descend {
        items.reverse();
    }
    items
}

/// Marks the cells of the winning line, if the board has one.
#[instrument(skip(board))]
pub fn highlighted_cells(board: &Board) -> [bool; 9] {
    let mut cells = [false; 9];
    if let Some(line) = rules::evaluate_winner(board) {
        for index in line.indices() {
            cells[index] = true;
        }
    }
    cells
}
