//! Game state owned by the controller.

use super::lines::StrikeClass;
use super::position::Position;
use super::types::{Board, GameOutcome, Player, Square};
use serde::{Deserialize, Serialize};

/// Complete state of one game session.
///
/// Mutation goes through [`GameController`](crate::GameController); the
/// renderer only ever sees a shared reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    turn: Player,
    outcome: GameOutcome,
    strike: Option<StrikeClass>,
    history: Vec<Position>,
}

impl GameState {
    /// Creates the state of a fresh game.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
            outcome: GameOutcome::InProgress,
            strike: None,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark is placed next.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the game outcome.
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Returns the winning line to highlight, if any.
    pub fn strike(&self) -> Option<StrikeClass> {
        self.strike
    }

    /// Positions played since the last reset, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// The most recent accepted move.
    pub fn last_move(&self) -> Option<Position> {
        self.history.last().copied()
    }

    /// Places the current player's mark and hands the turn over.
    ///
    /// Unchecked: the controller validates the move first.
    pub(crate) fn apply_move(&mut self, pos: Position) {
        self.board.set(pos, Square::Occupied(self.turn));
        self.history.push(pos);
        self.turn = self.turn.opponent();
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Records a terminal outcome.
    pub(crate) fn finish(&mut self, outcome: GameOutcome, strike: Option<StrikeClass>) {
        self.outcome = outcome;
        self.strike = strike;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
