//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::state::GameState;
use super::super::types::{Player, Square};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Even moves in the history belong to X and odd moves to O, and the turn
/// to come follows from the number of moves played. The turn is handed over
/// on every accepted move, including the last one, so this holds after the
/// game ends too.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let marks_alternate = state.history().iter().enumerate().all(|(i, &pos)| {
            let expected = if i % 2 == 0 { Player::X } else { Player::O };
            state.board().get(pos) == Square::Occupied(expected)
        });

        let expected_next = if state.history().len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };

        marks_alternate && state.turn() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
