//! Strike invariant: a strike is shown exactly when someone won.

use super::super::state::GameState;
use super::super::types::Square;
use super::Invariant;

/// Invariant: The strike matches the outcome.
///
/// A win always carries a strike whose line is fully owned by the winner.
/// Draws and games in progress carry none.
pub struct StrikeConsistentInvariant;

impl Invariant<GameState> for StrikeConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        match (state.outcome().winner(), state.strike()) {
            (Some(winner), Some(strike)) => strike
                .line()
                .cells()
                .iter()
                .all(|&pos| state.board().get(pos) == Square::Occupied(winner)),
            (None, None) => true,
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Strike shown exactly for a win, across the winner's line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::StrikeClass;
    use crate::position::Position;
    use crate::types::GameOutcome;

    #[test]
    fn test_no_strike_in_progress() {
        assert!(StrikeConsistentInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_strike_without_win_fails() {
        let mut state = GameState::new();
        state.finish(GameOutcome::Draw, Some(StrikeClass::Row1));
        assert!(!StrikeConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_strike_on_unowned_line_fails() {
        let mut state = GameState::new();
        state.apply_move(Position::at(0, 0));
        state.finish(GameOutcome::XWins, Some(StrikeClass::Row1));
        assert!(!StrikeConsistentInvariant::holds(&state));
    }
}
