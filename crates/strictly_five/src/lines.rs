//! The fixed table of winning lines.

use super::position::{BOARD_SIZE, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Display identifier for the strike drawn across a winning line.
///
/// The string form (`strike-row-1`, `strike-column-3`, ...) is what the
/// renderer keys its overlay styling on.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
pub enum StrikeClass {
    /// Top row.
    #[strum(serialize = "strike-row-1")]
    Row1,
    /// Second row.
    #[strum(serialize = "strike-row-2")]
    Row2,
    /// Middle row.
    #[strum(serialize = "strike-row-3")]
    Row3,
    /// Fourth row.
    #[strum(serialize = "strike-row-4")]
    Row4,
    /// Bottom row.
    #[strum(serialize = "strike-row-5")]
    Row5,
    /// Left column.
    #[strum(serialize = "strike-column-1")]
    Column1,
    /// Second column.
    #[strum(serialize = "strike-column-2")]
    Column2,
    /// Middle column.
    #[strum(serialize = "strike-column-3")]
    Column3,
    /// Fourth column.
    #[strum(serialize = "strike-column-4")]
    Column4,
    /// Right column.
    #[strum(serialize = "strike-column-5")]
    Column5,
    /// Top-left to bottom-right.
    #[strum(serialize = "strike-diagonal-1")]
    Diagonal1,
    /// Top-right to bottom-left.
    #[strum(serialize = "strike-diagonal-2")]
    Diagonal2,
}

/// Direction a strike runs across the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrikeDirection {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
    /// Top-left to bottom-right.
    Falling,
    /// Top-right to bottom-left.
    Rising,
}

impl StrikeClass {
    /// Returns how the strike is oriented.
    pub fn direction(self) -> StrikeDirection {
        use StrikeClass::*;

        match self {
            Row1 | Row2 | Row3 | Row4 | Row5 => StrikeDirection::Horizontal,
            Column1 | Column2 | Column3 | Column4 | Column5 => StrikeDirection::Vertical,
            Diagonal1 => StrikeDirection::Falling,
            Diagonal2 => StrikeDirection::Rising,
        }
    }

    /// Returns the winning line this identifier belongs to.
    pub fn line(self) -> &'static WinningLine {
        // Variants are declared in table order.
        &WINNING_LINES[self as usize]
    }
}

/// Five squares that win the game when one player owns all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct WinningLine {
    /// Squares on the line, in drawing order.
    cells: [Position; BOARD_SIZE],
    /// Overlay identifier for this line.
    strike: StrikeClass,
}

const fn cell(index: usize) -> Position {
    Position::at(index / BOARD_SIZE, index % BOARD_SIZE)
}

const fn line(indices: [usize; BOARD_SIZE], strike: StrikeClass) -> WinningLine {
    WinningLine {
        cells: [
            cell(indices[0]),
            cell(indices[1]),
            cell(indices[2]),
            cell(indices[3]),
            cell(indices[4]),
        ],
        strike,
    }
}

/// Every winning line. Evaluation walks this table in order (rows, then
/// columns, then diagonals) and reports the first complete line.
pub static WINNING_LINES: [WinningLine; 12] = [
    // Rows
    line([0, 1, 2, 3, 4], StrikeClass::Row1),
    line([5, 6, 7, 8, 9], StrikeClass::Row2),
    line([10, 11, 12, 13, 14], StrikeClass::Row3),
    line([15, 16, 17, 18, 19], StrikeClass::Row4),
    line([20, 21, 22, 23, 24], StrikeClass::Row5),
    // Columns
    line([0, 5, 10, 15, 20], StrikeClass::Column1),
    line([1, 6, 11, 16, 21], StrikeClass::Column2),
    line([2, 7, 12, 17, 22], StrikeClass::Column3),
    line([3, 8, 13, 18, 23], StrikeClass::Column4),
    line([4, 9, 14, 19, 24], StrikeClass::Column5),
    // Diagonals
    line([0, 6, 12, 18, 24], StrikeClass::Diagonal1),
    line([4, 8, 12, 16, 20], StrikeClass::Diagonal2),
];
