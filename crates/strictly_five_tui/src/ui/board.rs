//! Board rendering: the 25 squares and the strike across a winning line.

use super::layout::ScreenLayout;
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use strictly_five::{BOARD_CELLS, Player, Position, Square, StrikeClass, StrikeDirection};

/// What the board needs to know to draw itself.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    /// Squares in row-major order.
    pub squares: &'a [Square; BOARD_CELLS],
    /// Square under the cursor.
    pub cursor: Position,
    /// Mark shown as a preview on the cursor square.
    pub preview: Option<Player>,
    /// Winning line to strike through.
    pub strike: Option<StrikeClass>,
}

/// Renders the board: every square, then the strike on top.
pub fn render_board(frame: &mut Frame, layout: &ScreenLayout, view: BoardView<'_>) {
    for pos in Position::all() {
        let preview = view.preview.filter(|_| pos == view.cursor);
        render_square(
            frame,
            layout.cell(pos),
            pos,
            view.squares[pos.index()],
            pos == view.cursor,
            preview,
        );
    }
    frame.render_widget(
        StrikeOverlay::new(view.strike, &layout.cells),
        layout.board,
    );
}

fn mark_style(player: Player) -> Style {
    let color = match player {
        Player::X => Color::Blue,
        Player::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn render_square(
    frame: &mut Frame,
    area: Rect,
    pos: Position,
    square: Square,
    under_cursor: bool,
    preview: Option<Player>,
) {
    // Grid lines come from each square's own right and bottom edges.
    let mut borders = Borders::NONE;
    if pos.has_right_border() {
        borders |= Borders::RIGHT;
    }
    if pos.has_bottom_border() {
        borders |= Borders::BOTTOM;
    }
    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mark = match (square, preview) {
        (Square::Occupied(player), _) => Span::styled(player.symbol(), mark_style(player)),
        (Square::Empty, Some(player)) => Span::styled(
            player.symbol(),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
        ),
        (Square::Empty, None) => Span::raw(" "),
    };

    let background = if under_cursor {
        Style::default().bg(Color::White)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(vec![Line::default(), Line::from(mark)])
        .alignment(Alignment::Center)
        .style(background);
    frame.render_widget(paragraph, inner);
}

/// Line drawn across the winning squares.
///
/// Invisible when there is no strike. Marks on the line are kept and
/// recoloured; everything else along the path is overdrawn.
pub struct StrikeOverlay<'a> {
    strike: Option<StrikeClass>,
    cells: &'a [Rect; BOARD_CELLS],
}

impl<'a> StrikeOverlay<'a> {
    /// Creates the overlay for `strike` over squares laid out as `cells`.
    pub fn new(strike: Option<StrikeClass>, cells: &'a [Rect; BOARD_CELLS]) -> Self {
        Self { strike, cells }
    }

    /// Glyph used for the strike's direction.
    pub fn glyph(direction: StrikeDirection) -> &'static str {
        match direction {
            StrikeDirection::Horizontal => "━",
            StrikeDirection::Vertical => "┃",
            StrikeDirection::Falling => "╲",
            StrikeDirection::Rising => "╱",
        }
    }

    fn style() -> Style {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    /// Point where a square's mark is drawn.
    fn mark_point(rect: Rect) -> (u16, u16) {
        (rect.x + (CELL_INNER_WIDTH - 1) / 2, rect.y + 1)
    }
}

const CELL_INNER_WIDTH: u16 = super::layout::CELL_WIDTH - 1;

fn is_mark(symbol: &str) -> bool {
    symbol == "X" || symbol == "O"
}

fn stroke(buf: &mut Buffer, x: u16, y: u16, glyph: &str) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        if !is_mark(cell.symbol()) {
            cell.set_symbol(glyph);
        }
        cell.set_style(StrikeOverlay::style());
    }
}

impl Widget for StrikeOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(strike) = self.strike else {
            return;
        };
        let direction = strike.direction();
        let glyph = Self::glyph(direction);
        let cells = strike.line().cells();
        let first = self.cells[cells[0].index()];
        let last = self.cells[cells[cells.len() - 1].index()];
        if first.is_empty() || last.is_empty() {
            return;
        }

        match direction {
            StrikeDirection::Horizontal => {
                let (_, y) = Self::mark_point(first);
                for x in area.left().max(first.x)..last.right().min(area.right()) {
                    stroke(buf, x, y, glyph);
                }
            }
            StrikeDirection::Vertical => {
                let (x, _) = Self::mark_point(first);
                for y in area.top().max(first.y)..last.bottom().min(area.bottom()) {
                    stroke(buf, x, y, glyph);
                }
            }
            StrikeDirection::Falling | StrikeDirection::Rising => {
                for pos in cells {
                    let (x, y) = Self::mark_point(self.cells[pos.index()]);
                    let (before, after) = if direction == StrikeDirection::Falling {
                        ((x - 1, y - 1), (x + 1, y + 1))
                    } else {
                        ((x + 1, y - 1), (x - 1, y + 1))
                    };
                    stroke(buf, x, y, glyph);
                    stroke(buf, before.0, before.1, glyph);
                    stroke(buf, after.0, after.1, glyph);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::layout::ScreenLayout;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.left()..buf.area.right())
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_no_strike_draws_nothing() {
        let area = Rect::new(0, 0, 60, 32);
        let layout = ScreenLayout::new(area);
        let mut buf = Buffer::empty(area);
        StrikeOverlay::new(None, &layout.cells).render(layout.board, &mut buf);
        assert_eq!(buf, Buffer::empty(area));
    }

    #[test]
    fn test_row_strike_crosses_whole_row() {
        let area = Rect::new(0, 0, 60, 32);
        let layout = ScreenLayout::new(area);
        let mut buf = Buffer::empty(area);
        StrikeOverlay::new(Some(StrikeClass::Row2), &layout.cells).render(layout.board, &mut buf);

        let y = layout.cell(Position::at(1, 0)).y + 1;
        let text = row_text(&buf, y);
        assert_eq!(text.matches('━').count(), layout.board.width as usize);
    }

    #[test]
    fn test_column_strike_keeps_marks() {
        let area = Rect::new(0, 0, 60, 32);
        let layout = ScreenLayout::new(area);
        let mut buf = Buffer::empty(area);
        let (x, y) = StrikeOverlay::mark_point(layout.cell(Position::at(0, 4)));
        buf[(x, y)].set_symbol("O");

        StrikeOverlay::new(Some(StrikeClass::Column5), &layout.cells).render(layout.board, &mut buf);

        assert_eq!(buf[(x, y)].symbol(), "O");
        assert_eq!(buf[(x, y + 1)].symbol(), "┃");
        assert_eq!(buf[(x, y)].fg, Color::Yellow);
    }

    #[test]
    fn test_diagonal_strike_marks_each_square() {
        let area = Rect::new(0, 0, 60, 32);
        let layout = ScreenLayout::new(area);
        let mut buf = Buffer::empty(area);
        StrikeOverlay::new(Some(StrikeClass::Diagonal2), &layout.cells).render(layout.board, &mut buf);

        for pos in StrikeClass::Diagonal2.line().cells() {
            let (x, y) = StrikeOverlay::mark_point(layout.cell(*pos));
            assert_eq!(buf[(x + 1, y - 1)].symbol(), "╱");
        }
    }
}
