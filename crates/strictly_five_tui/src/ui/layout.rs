//! Screen geometry shared by drawing and mouse hit-testing.
//!
//! Both sides build a [`ScreenLayout`] from the same terminal area, so a
//! click lands on exactly the square that was drawn there.

use ratatui::layout::{Constraint, Direction, Layout, Position as Point, Rect};
use strictly_five::{BOARD_CELLS, BOARD_SIZE, Position};

/// Width of one square, including its right grid line.
pub const CELL_WIDTH: u16 = 8;
/// Height of one square, including its bottom grid line.
pub const CELL_HEIGHT: u16 = 4;

const BOARD_WIDTH: u16 = CELL_WIDTH * BOARD_SIZE as u16;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * BOARD_SIZE as u16;
const RESET_WIDTH: u16 = 16;

/// Where everything goes on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title line.
    pub title: Rect,
    /// Whose turn it is.
    pub status: Rect,
    /// The 5x5 grid.
    pub board: Rect,
    /// Squares in row-major order, clipped to the screen.
    pub cells: [Rect; BOARD_CELLS],
    /// Win/draw banner.
    pub banner: Rect,
    /// The reset button.
    pub reset: Rect,
    /// Key help.
    pub help: Rect,
}

impl ScreenLayout {
    /// Lays the screen out inside `area`.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),            // Title
                Constraint::Length(1),            // Status
                Constraint::Min(BOARD_HEIGHT),    // Board
                Constraint::Length(1),            // Banner
                Constraint::Length(3),            // Reset
                Constraint::Length(1),            // Help
            ])
            .split(area);

        let board = center_rect(chunks[2], BOARD_WIDTH, BOARD_HEIGHT).intersection(area);
        let cells = std::array::from_fn(|i| {
            let (row, col) = ((i / BOARD_SIZE) as u16, (i % BOARD_SIZE) as u16);
            Rect::new(
                board.x + col * CELL_WIDTH,
                board.y + row * CELL_HEIGHT,
                CELL_WIDTH,
                CELL_HEIGHT,
            )
            .intersection(board)
        });

        Self {
            title: chunks[0],
            status: chunks[1],
            board,
            cells,
            banner: chunks[3],
            reset: center_rect(chunks[4], RESET_WIDTH, 3),
            help: chunks[5],
        }
    }

    /// Returns the square drawn at terminal coordinates (`column`, `row`).
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        let point = Point::new(column, row);
        self.cells
            .iter()
            .position(|rect| rect.contains(point))
            .and_then(Position::from_index)
    }

    /// Returns true if (`column`, `row`) is on the reset button.
    pub fn on_reset(&self, column: u16, row: u16) -> bool {
        self.reset.contains(Point::new(column, row))
    }

    /// Returns the area of one square.
    pub fn cell(&self, pos: Position) -> Rect {
        self.cells[pos.index()]
    }
}

impl Default for ScreenLayout {
    fn default() -> Self {
        Self::new(Rect::default())
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
