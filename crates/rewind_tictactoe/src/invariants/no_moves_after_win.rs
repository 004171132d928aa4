//! Terminal win invariant: a won board is always the last entry.

use super::super::{GameEngine, rules};
use super::Invariant;

/// Invariant: no entry follows a board with a winning line.
pub struct NoMovesAfterWinInvariant;

impl Invariant<GameEngine> for NoMovesAfterWinInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();
        history
            .iter()
            .position(|entry| rules::evaluate_winner(entry.board()).is_some())
            .is_none_or(|won| won == history.len() - 1)
    }

    fn description() -> &'static str {
        "No move follows a winning board"
    }
}
