//! Stateless UI rendering.

mod board;
mod layout;
mod outcome;

pub use board::{BoardView, StrikeOverlay, render_board};
pub use layout::{CELL_HEIGHT, CELL_WIDTH, ScreenLayout};
pub use outcome::{RESET_LABEL, render_outcome};

use crate::app::App;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use strictly_five::{GameController, SoundPlayer};

/// Draws the whole screen for the current app state.
pub fn draw<S: SoundPlayer>(frame: &mut Frame, app: &App<S>) {
    let layout = ScreenLayout::new(frame.area());
    let game = app.controller();

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, layout.title);

    let status = Paragraph::new(status_line(game))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    frame.render_widget(status, layout.status);

    render_board(
        frame,
        &layout,
        BoardView {
            squares: game.board().squares(),
            cursor: app.cursor(),
            preview: app.preview(),
            strike: game.strike(),
        },
    );

    render_outcome(frame, &layout, game.outcome());

    let help = Paragraph::new("click or arrows + enter to play · r: play again · q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);
}

/// Whose turn it is and the move just made, e.g.
/// `Player O's turn · X played row 2, column 3`. Once the game is over only
/// the final move is shown; the banner says the rest.
pub fn status_line<S: SoundPlayer>(game: &GameController<S>) -> String {
    let last = game.last_move().and_then(|pos| {
        let player = game.board().get(pos).player()?;
        Some(format!("{} played {}", player, pos))
    });

    match (game.outcome().is_over(), last) {
        (true, last) => last.unwrap_or_default(),
        (false, Some(last)) => format!("Player {}'s turn · {}", game.turn(), last),
        (false, None) => format!("Player {}'s turn", game.turn()),
    }
}
