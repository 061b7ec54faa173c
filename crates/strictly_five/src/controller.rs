//! The game controller: the only place game state changes.

use super::invariants::{GameInvariants, InvariantSet};
use super::lines::StrikeClass;
use super::position::Position;
use super::rules;
use super::sound::SoundPlayer;
use super::state::GameState;
use super::types::{Board, GameOutcome, Player};
use tracing::{debug, error, info, instrument};

/// Why a click left the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IgnoreReason {
    /// The game already ended.
    #[display("game is over")]
    GameOver,
    /// The square already holds a mark.
    #[display("{} is already occupied", _0)]
    Occupied(Position),
    /// The index does not name a square.
    #[display("index {} is off the board", _0)]
    OffBoard(usize),
}

/// What happened to a click.
///
/// Ignored clicks are not errors, the host simply has nothing to redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickResult {
    /// The mark was placed; carries the outcome after the move.
    Accepted(GameOutcome),
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl ClickResult {
    /// Returns true if the click changed the game.
    pub fn is_accepted(&self) -> bool {
        matches!(self, ClickResult::Accepted(_))
    }
}

/// Owns one game session and the sound capability it reports to.
#[derive(Debug, Clone)]
pub struct GameController<S> {
    state: GameState,
    sound: S,
}

impl<S: SoundPlayer> GameController<S> {
    /// Creates a controller for a fresh game.
    pub fn new(sound: S) -> Self {
        Self {
            state: GameState::new(),
            sound,
        }
    }

    /// Handles a click on the square at `index` (0-24).
    ///
    /// Clicks after the game ended, on occupied squares or off the board
    /// are ignored. An accepted click places the current mark, hands the
    /// turn over and re-evaluates the board. Every accepted click plays the
    /// move cue; the click that ends the game also plays the game-over cue.
    #[instrument(skip(self), fields(turn = %self.state.turn()))]
    pub fn handle_cell_click(&mut self, index: usize) -> ClickResult {
        if self.state.outcome().is_over() {
            debug!("Click ignored, game is over");
            return ClickResult::Ignored(IgnoreReason::GameOver);
        }

        let Some(pos) = Position::from_index(index) else {
            debug!("Click ignored, index off the board");
            return ClickResult::Ignored(IgnoreReason::OffBoard(index));
        };

        if !self.state.board().is_empty(pos) {
            debug!(%pos, "Click ignored, square occupied");
            return ClickResult::Ignored(IgnoreReason::Occupied(pos));
        }

        self.state.apply_move(pos);
        debug!(%pos, moves = self.state.history().len(), "Mark placed");

        let verdict = rules::evaluate(self.state.board());
        let outcome = verdict.outcome();
        self.sound.play_move();

        if outcome.is_over() {
            let strike = verdict.line().map(|line| *line.strike());
            self.state.finish(outcome, strike);
            info!(%outcome, strike = ?strike, "Game over");
            self.sound.play_game_over();
        }

        self.check_invariants();
        ClickResult::Accepted(outcome)
    }

    /// Starts a new game, whatever the current state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(previous = %self.state.outcome(), "Resetting game");
        self.state = GameState::new();
    }

    /// Returns the full game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the player whose mark is placed next.
    pub fn turn(&self) -> Player {
        self.state.turn()
    }

    /// Returns the game outcome.
    pub fn outcome(&self) -> GameOutcome {
        self.state.outcome()
    }

    /// Returns the winning line to highlight, if any.
    pub fn strike(&self) -> Option<StrikeClass> {
        self.state.strike()
    }

    /// Returns the squares played so far, oldest first.
    pub fn history(&self) -> &[Position] {
        self.state.history()
    }

    /// Returns the most recent move.
    pub fn last_move(&self) -> Option<Position> {
        self.state.last_move()
    }

    /// Returns the sound capability.
    pub fn sound(&self) -> &S {
        &self.sound
    }

    fn check_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = GameInvariants::check_all(&self.state)
        {
            error!(?violations, "Game invariants violated");
        }
    }
}

impl<S: SoundPlayer + Default> Default for GameController<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}
