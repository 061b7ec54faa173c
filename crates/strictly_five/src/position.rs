//! Board positions for the 5x5 grid.

use serde::{Deserialize, Serialize};

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: usize = 5;

/// Number of squares on the board.
pub const BOARD_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// A square on the board, addressed by its row-major index (0-24).
///
/// Positions can only be built from in-range indices, so board access
/// through a `Position` never goes out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position(u8);

impl Position {
    /// Creates a position from row and column.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not below [`BOARD_SIZE`].
    pub const fn at(row: usize, col: usize) -> Self {
        assert!(row < BOARD_SIZE && col < BOARD_SIZE, "position out of range");
        Self((row * BOARD_SIZE + col) as u8)
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < BOARD_CELLS).then_some(Self(index as u8))
    }

    /// Converts position to board index (0-24).
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Row of this position, top row is 0.
    pub fn row(self) -> usize {
        self.index() / BOARD_SIZE
    }

    /// Column of this position, left column is 0.
    pub fn col(self) -> usize {
        self.index() % BOARD_SIZE
    }

    /// Grid line drawn on the right edge, except in the rightmost column.
    pub fn has_right_border(self) -> bool {
        self.col() != BOARD_SIZE - 1
    }

    /// Grid line drawn on the bottom edge, except in the bottom row.
    pub fn has_bottom_border(self) -> bool {
        self.row() != BOARD_SIZE - 1
    }

    /// Moves by the given row/column offset, `None` when leaving the grid.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.row().checked_add_signed(d_row)?;
        let col = self.col().checked_add_signed(d_col)?;
        (row < BOARD_SIZE && col < BOARD_SIZE).then(|| Self::at(row, col))
    }

    /// All 25 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_CELLS as u8).map(Position)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row {}, column {}", self.row() + 1, self.col() + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index_bounds() {
        assert_eq!(Position::from_index(0), Some(Position::at(0, 0)));
        assert_eq!(Position::from_index(24), Some(Position::at(4, 4)));
        assert_eq!(Position::from_index(25), None);
    }

    #[test]
    fn test_row_major_mapping() {
        let pos = Position::from_index(13).unwrap();
        assert_eq!(pos.row(), 2);
        assert_eq!(pos.col(), 3);
    }

    #[test]
    fn test_borders_follow_grid_edges() {
        for pos in Position::all() {
            assert_eq!(pos.has_right_border(), pos.index() % 5 != 4);
            assert_eq!(pos.has_bottom_border(), pos.index() / 5 != 4);
        }
        let corner = Position::at(4, 4);
        assert!(!corner.has_right_border());
        assert!(!corner.has_bottom_border());
    }

    #[test]
    fn test_offset_stays_on_grid() {
        let origin = Position::at(0, 0);
        assert_eq!(origin.offset(-1, 0), None);
        assert_eq!(origin.offset(0, -1), None);
        assert_eq!(origin.offset(1, 1), Some(Position::at(1, 1)));
        assert_eq!(Position::at(4, 4).offset(0, 1), None);
    }
}
