//! Strictly Five - 5x5 tic-tac-toe game logic
//!
//! Five in a row, column or diagonal wins. This crate holds the pure game:
//! no rendering and no I/O, so any front end can drive it.
//!
//! # Architecture
//!
//! - **Lines**: the fixed table of twelve winning lines and their strike identifiers
//! - **Rules**: the outcome evaluator (win, draw, in progress)
//! - **Controller**: owns the game state, validates clicks, plays sound cues
//! - **Invariants**: properties checked after every accepted move
//!
//! # Example
//!
//! ```
//! use strictly_five::{GameController, GameOutcome, Silent};
//!
//! let mut game = GameController::new(Silent);
//! for index in [0, 5, 1, 6, 2, 7, 3, 8, 4] {
//!     game.handle_cell_click(index);
//! }
//! assert_eq!(game.outcome(), GameOutcome::XWins);
//! assert_eq!(game.strike().map(|s| s.to_string()).as_deref(), Some("strike-row-1"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controller;
mod invariants;
mod lines;
mod position;
mod rules;
mod sound;
mod state;
mod types;

// Crate-level exports - Board model
pub use position::{BOARD_CELLS, BOARD_SIZE, Position};
pub use types::{Board, GameOutcome, Player, Square};

// Crate-level exports - Winning lines
pub use lines::{StrikeClass, StrikeDirection, WINNING_LINES, WinningLine};

// Crate-level exports - Rules
pub use rules::{Verdict, check_winner, evaluate, is_draw, is_full};

// Crate-level exports - Controller
pub use controller::{ClickResult, GameController, IgnoreReason};
pub use state::GameState;

// Crate-level exports - Sound
pub use sound::{Silent, SoundCue, SoundPlayer};

// Crate-level exports - Invariants
pub use invariants::{
    AlternatingTurnInvariant, GameInvariants, Invariant, InvariantSet, InvariantViolation,
    MonotonicBoardInvariant, StrikeConsistentInvariant,
};
