//! History-keeping game engine for tic-tac-toe.
//!
//! The engine stores every board snapshot of the active line of play and
//! a cursor (`current_step`) into that list. Moves branch off the cursor:
//! any snapshots after it are discarded before the new one is appended.
//! Jumping only moves the cursor. The player to move is never stored; it
//! is recomputed from the parity of the cursor.

use super::history::HistoryEntry;
use super::invariants::{HistoryInvariants, InvariantSet};
use super::phases::GameStatus;
use super::rules::{self, WinningLine};
use super::{Board, Player, Position, Square};
use tracing::{debug, instrument, warn};

/// Why a move was ignored.
///
/// Ignored moves leave the engine untouched; this only reports the reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IgnoredMove {
    /// The cell index is not on the board.
    #[display("Cell {} is off the board", _0)]
    OutOfBounds(usize),
    /// The square at the position is already occupied.
    #[display("{} is already occupied", _0)]
    Occupied(Position),
    /// The displayed board already has a winning line.
    #[display("Game is already over")]
    GameOver,
}

/// What a call to [`GameEngine::play_move`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The mark was placed; `step` is the new current step.
    Placed {
        /// Index of the new history entry.
        step: usize,
    },
    /// Nothing changed.
    Ignored(IgnoredMove),
}

impl MoveOutcome {
    /// Returns true if the move changed the engine.
    pub fn is_placed(&self) -> bool {
        matches!(self, MoveOutcome::Placed { .. })
    }
}

/// Tic-tac-toe engine with branching move history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) current_step: usize,
}

impl GameEngine {
    /// Creates a new game holding only the empty start board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::start()],
            current_step: 0,
        }
    }

    /// Plays the current player's mark at `cell` (0-8).
    ///
    /// The move is ignored when the cell is off the board, already
    /// occupied, or the displayed board already has a winner. Otherwise
    /// every entry after the current step is dropped, the new board is
    /// appended and becomes the current step.
    #[instrument(skip(self), fields(step = self.current_step, player = %self.next_player()))]
    pub fn play_move(&mut self, cell: usize) -> MoveOutcome {
        let Some(pos) = Position::from_index(cell) else {
            return self.ignore(IgnoredMove::OutOfBounds(cell));
        };

        let board = self.current_board();
        if rules::evaluate_winner(board).is_some() {
            return self.ignore(IgnoredMove::GameOver);
        }
        if !board.is_empty(pos) {
            return self.ignore(IgnoredMove::Occupied(pos));
        }

        let mover = self.next_player();
        let mut next = board.clone();
        next.set(pos, Square::Occupied(mover));

        let move_number = self.current_step + 1;
        self.history.truncate(move_number);
        self.history.push(HistoryEntry::after_move(next, move_number, pos));
        self.current_step = move_number;

        debug!(position = %pos, move_number, "Move placed");
        self.check_invariants();

        MoveOutcome::Placed {
            step: self.current_step,
        }
    }

    /// Moves the cursor to `step` without touching history.
    ///
    /// Returns false, changing nothing, if `step` is past the end of history.
    #[instrument(skip(self), fields(from = self.current_step))]
    pub fn jump_to(&mut self, step: usize) -> bool {
        if step >= self.history.len() {
            debug!(len = self.history.len(), "Jump target out of range, ignored");
            return false;
        }
        self.current_step = step;
        true
    }

    /// Returns true if the displayed board is full with no winning line.
    #[instrument(skip(self))]
    pub fn is_draw(&self) -> bool {
        rules::is_draw(self.current_board())
    }

    /// Summarizes the displayed position.
    #[instrument(skip(self))]
    pub fn status(&self) -> GameStatus {
        if let Some(line) = self.winning_line() {
            GameStatus::Winner(line.player())
        } else if self.is_draw() {
            GameStatus::Draw
        } else {
            GameStatus::NextToMove(self.next_player())
        }
    }

    /// Winning line on the displayed board, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        rules::evaluate_winner(self.current_board())
    }

    /// The player to move at the current step.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.current_step)
    }

    /// All snapshots of the active line of play, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Index of the newest snapshot.
    pub fn latest_step(&self) -> usize {
        self.history.len() - 1
    }

    /// The displayed snapshot.
    pub fn current_entry(&self) -> &HistoryEntry {
        &self.history[self.current_step]
    }

    /// The displayed board.
    pub fn current_board(&self) -> &Board {
        self.current_entry().board()
    }

    /// Empty squares on the displayed board, or none once it is decided.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.status().is_terminal() {
            Vec::new()
        } else {
            Position::valid_moves(self.current_board())
        }
    }

    fn ignore(&self, reason: IgnoredMove) -> MoveOutcome {
        debug!(%reason, "Move ignored");
        MoveOutcome::Ignored(reason)
    }

    fn check_invariants(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        let result = HistoryInvariants::check_all(self);
        if let Err(violations) = &result {
            for violation in violations {
                warn!(description = %violation.description, "History invariant violated");
            }
        }
        debug_assert!(result.is_ok(), "History invariants violated");
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
