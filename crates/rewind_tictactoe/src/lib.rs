//! Rewind tic-tac-toe - game engine with branching move history
//!
//! The engine records a snapshot of the board after every move and keeps a
//! cursor into that list. Players may jump back to any earlier snapshot and
//! continue from there; the abandoned future is discarded.
//!
//! # Architecture
//!
//! - **Types**: players, squares, positions and the board
//! - **Rules**: pure win and draw detection
//! - **Engine**: move history, the step cursor and status queries
//! - **Invariants**: composable checks over the history
//! - **View**: move list, sort order and highlight for front ends
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameEngine, GameStatus, Player};
//!
//! let mut engine = GameEngine::new();
//! for cell in [0, 3, 1, 4, 2] {
//!     engine.play_move(cell);
//! }
//! assert_eq!(engine.status(), GameStatus::Winner(Player::X));
//!
//! // Go back two moves and let O play elsewhere.
//! engine.jump_to(3);
//! assert!(engine.play_move(2).is_placed());
//! assert_eq!(engine.history().len(), 5);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod history;
pub mod invariants;
mod phases;
mod position;
pub mod rules;
mod types;
pub mod view;

pub use engine::{GameEngine, IgnoredMove, MoveOutcome};
pub use history::HistoryEntry;
pub use phases::{GameStatus, Phase};
pub use position::Position;
pub use rules::{WinningLine, evaluate_winner};
pub use types::{Board, Player, Square};
pub use view::{MoveDescription, MoveListItem, SortOrder};

