//! Single-cell delta invariant: each entry adds exactly one mark.

use super::super::{GameEngine, Player, Position, Square};
use super::Invariant;

/// Invariant: entry `k` differs from entry `k - 1` in exactly one cell.
///
/// That cell is the entry's `last_played`, it was empty before and now
/// holds the mark of the player whose turn it was at step `k - 1`. The
/// entry's move number is `k`.
pub struct SingleCellDeltaInvariant;

impl Invariant<GameEngine> for SingleCellDeltaInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine
            .history()
            .windows(2)
            .enumerate()
            .all(|(index, pair)| {
                let [previous, entry] = pair else {
                    return false;
                };
                let Some(played) = *entry.last_played() else {
                    return false;
                };
                let mover = Player::for_step(index);

                let changed: Vec<Position> = Position::ALL
                    .into_iter()
                    .filter(|pos| entry.board().get(*pos) != previous.board().get(*pos))
                    .collect();

                *entry.move_number() == index + 1
                    && changed == [played]
                    && previous.board().get(played) == Square::Empty
                    && entry.board().get(played) == Square::Occupied(mover)
            })
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one mark for the player to move"
    }
}
