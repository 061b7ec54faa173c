//! Win detection logic.

use super::super::lines::{WINNING_LINES, WinningLine};
use super::super::types::{Board, Player, Square};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Returns the player owning all five squares of a line together with that
/// line. Lines are scanned in table order and the first match wins, so a
/// move completing a row and a column reports the row.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Player, &'static WinningLine)> {
    WINNING_LINES.iter().find_map(|line| {
        let [first, rest @ ..] = line.cells();
        match board.get(*first) {
            Square::Occupied(player)
                if rest.iter().all(|pos| board.get(*pos) == Square::Occupied(player)) =>
            {
                Some((player, line))
            }
            _ => None,
        }
    })
}
