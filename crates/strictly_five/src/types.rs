//! Core domain types for 5x5 tic-tac-toe.

use super::position::{BOARD_CELLS, Position};
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the mark drawn for this player.
    pub fn symbol(self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 5x5 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-24).
    squares: [Square; BOARD_CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; BOARD_CELLS],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; BOARD_CELLS] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Current status of the game.
///
/// `InProgress` is the only non-terminal state. The others are left only
/// through a reset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum GameOutcome {
    /// Game is ongoing.
    #[default]
    #[display("In progress")]
    InProgress,
    /// Player X completed a line.
    #[display("Player X Wins!")]
    XWins,
    /// Player O completed a line.
    #[display("Player O Wins!")]
    OWins,
    /// Board filled with no completed line.
    #[display("It's a Draw!")]
    Draw,
}

impl GameOutcome {
    /// Outcome for a win by `player`.
    pub fn win_for(player: Player) -> Self {
        match player {
            Player::X => GameOutcome::XWins,
            Player::O => GameOutcome::OWins,
        }
    }

    /// Returns true once the game has ended.
    pub fn is_over(self) -> bool {
        self != GameOutcome::InProgress
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::XWins => Some(Player::X),
            GameOutcome::OWins => Some(Player::O),
            GameOutcome::InProgress | GameOutcome::Draw => None,
        }
    }

    /// Banner text for a finished game, `None` while in progress.
    pub fn banner(self) -> Option<String> {
        self.is_over().then(|| self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_alternates() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_banner_text() {
        assert_eq!(GameOutcome::InProgress.banner(), None);
        assert_eq!(GameOutcome::XWins.banner().as_deref(), Some("Player X Wins!"));
        assert_eq!(GameOutcome::OWins.banner().as_deref(), Some("Player O Wins!"));
        assert_eq!(GameOutcome::Draw.banner().as_deref(), Some("It's a Draw!"));
    }

    #[test]
    fn test_board_counts_occupied() {
        let mut board = Board::new();
        board.set(Position::at(0, 0), Square::Occupied(Player::X));
        board.set(Position::at(4, 4), Square::Occupied(Player::O));
        assert_eq!(board.occupied(), 2);
        assert!(board.is_empty(Position::at(2, 2)));
        assert!(!board.is_empty(Position::at(4, 4)));
    }
}
