//! Game rules for 5x5 tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state.
//! Rules are separated from board storage so the controller and the
//! invariants can both compose them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::check_winner;

use super::lines::WinningLine;
use super::types::{Board, GameOutcome};
use tracing::instrument;

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    outcome: GameOutcome,
    line: Option<&'static WinningLine>,
}

impl Verdict {
    /// Outcome implied by the board.
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// The completed line, present only for a win.
    pub fn line(&self) -> Option<&'static WinningLine> {
        self.line
    }
}

/// Evaluates a board.
///
/// A complete line wins; the first complete line in table order is the one
/// reported. Otherwise a full board is a draw, and anything else is still
/// in progress.
#[instrument(skip(board), fields(occupied = board.occupied()))]
pub fn evaluate(board: &Board) -> Verdict {
    if let Some((winner, line)) = check_winner(board) {
        return Verdict {
            outcome: GameOutcome::win_for(winner),
            line: Some(line),
        };
    }

    let outcome = if is_full(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    };
    Verdict {
        outcome,
        line: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::StrikeClass;
    use crate::position::Position;
    use crate::types::{Player, Square};

    #[test]
    fn test_empty_board_in_progress() {
        let verdict = evaluate(&Board::new());
        assert_eq!(verdict.outcome(), GameOutcome::InProgress);
        assert_eq!(verdict.line(), None);
    }

    #[test]
    fn test_column_win_reports_line() {
        let mut board = Board::new();
        for row in 0..5 {
            board.set(Position::at(row, 2), Square::Occupied(Player::O));
        }
        let verdict = evaluate(&board);
        assert_eq!(verdict.outcome(), GameOutcome::OWins);
        assert_eq!(verdict.line().map(|l| *l.strike()), Some(StrikeClass::Column3));
    }

    #[test]
    fn test_evaluate_does_not_mutate() {
        let mut board = Board::new();
        board.set(Position::at(1, 1), Square::Occupied(Player::X));
        let before = board.clone();
        let first = evaluate(&board);
        let second = evaluate(&board);
        assert_eq!(first, second);
        assert_eq!(board, before);
    }
}
