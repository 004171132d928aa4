//! First-class invariants over the move history.
//!
//! Invariants are logical properties of a [`GameEngine`](crate::GameEngine)
//! that must hold after every transition. The engine checks them after each
//! move; they are also testable on their own.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of two to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        finish(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        finish(violations)
    }
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        check::<S, I4>(state, &mut violations);
        finish(violations)
    }
}

pub mod no_moves_after_win;
pub mod origin;
pub mod single_cell_delta;
pub mod step_in_bounds;

pub use no_moves_after_win::NoMovesAfterWinInvariant;
pub use origin::OriginInvariant;
pub use single_cell_delta::SingleCellDeltaInvariant;
pub use step_in_bounds::StepInBoundsInvariant;

/// Every history invariant as a composable set.
pub type HistoryInvariants = (
    OriginInvariant,
    SingleCellDeltaInvariant,
    StepInBoundsInvariant,
    NoMovesAfterWinInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, GameEngine, HistoryEntry, Player, Position, Square};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(HistoryInvariants::check_all(&GameEngine::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_branching() {
        let mut engine = GameEngine::new();
        for cell in [0, 4, 8] {
            engine.play_move(cell);
        }
        engine.jump_to(1);
        engine.play_move(2);
        assert!(HistoryInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        let mut engine = GameEngine::new();
        engine.play_move(4);

        // Second entry claims move 5 and adds two marks at once.
        let mut board = engine.current_board().clone();
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        board.set(Position::TopRight, Square::Occupied(Player::O));
        engine
            .history
            .push(HistoryEntry::after_move(board, 5, Position::TopLeft));
        engine.current_step = 7;

        let violations = HistoryInvariants::check_all(&engine).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert!(violations.contains(&InvariantViolation::new(
            SingleCellDeltaInvariant::description()
        )));
        assert!(violations.contains(&InvariantViolation::new(
            StepInBoundsInvariant::description()
        )));
    }

    #[test]
    fn test_two_invariants_as_set() {
        type Pair = (OriginInvariant, StepInBoundsInvariant);
        let mut engine = GameEngine::new();
        assert!(Pair::check_all(&engine).is_ok());

        engine.history[0] = HistoryEntry::after_move(Board::new(), 0, Position::Center);
        assert!(Pair::check_all(&engine).is_err());
    }
}
