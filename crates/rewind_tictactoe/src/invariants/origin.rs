//! Origin invariant: history starts from the empty board.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: the first entry is the empty board at move 0.
pub struct OriginInvariant;

impl Invariant<GameEngine> for OriginInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.history().first().is_some_and(|entry| {
            *entry.move_number() == 0
                && entry.last_played().is_none()
                && entry.board().occupied() == 0
        })
    }

    fn description() -> &'static str {
        "History starts with the empty board at move 0"
    }
}
