//! Step bounds invariant: the cursor always points into history.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: `current_step` is a valid index into history.
pub struct StepInBoundsInvariant;

impl Invariant<GameEngine> for StepInBoundsInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.current_step < engine.history.len()
    }

    fn description() -> &'static str {
        "Current step is a valid history index"
    }
}
