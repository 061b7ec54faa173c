//! Win/draw banner and the reset button.

use super::layout::ScreenLayout;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Paragraph},
};
use strictly_five::GameOutcome;

/// Label on the reset button.
pub const RESET_LABEL: &str = "Play Again";

/// Renders the banner and reset button once the game is over; draws
/// nothing while it is still in progress.
pub fn render_outcome(frame: &mut Frame, layout: &ScreenLayout, outcome: GameOutcome) {
    let Some(banner) = outcome.banner() else {
        return;
    };

    let color = match outcome {
        GameOutcome::XWins => Color::Blue,
        GameOutcome::OWins => Color::Red,
        _ => Color::Yellow,
    };
    let text = Paragraph::new(banner)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(text, layout.banner);

    let button = Paragraph::new(RESET_LABEL)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .block(Block::bordered().border_type(BorderType::Rounded));
    frame.render_widget(button, layout.reset);
}
