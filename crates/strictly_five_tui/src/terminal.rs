//! Terminal setup, teardown and the event loop.

use crate::app::App;
use crate::ui;
use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use strictly_five::SoundPlayer;
use tracing::{error, info, instrument, warn};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Holds the terminal in raw mode on the alternate screen with mouse
/// capture on. Dropping it puts everything back.
///
/// The guard exists from the moment raw mode is on, so a failure in any
/// later setup step still restores the terminal.
pub(crate) struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    /// Enables raw mode, then switches `out` to the alternate screen with
    /// mouse capture.
    pub(crate) fn enter(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self { out };
        execute!(guard.out, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }

    fn restore(&mut self) -> io::Result<()> {
        let raw = disable_raw_mode();
        execute!(self.out, LeaveAlternateScreen, DisableMouseCapture, Show)?;
        raw
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

/// Takes over the terminal, runs the game until the user quits, and gives
/// the terminal back even if setup or the loop fails.
pub fn run<S: SoundPlayer>(mut app: App<S>) -> Result<()> {
    let _guard = TerminalGuard::enter(io::stdout())?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let res = run_app(&mut terminal, &mut app);
    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draw, wait for one event, apply it; repeat.
#[instrument(skip_all)]
fn run_app<S: SoundPlayer>(terminal: &mut Tui, app: &mut App<S>) -> Result<()> {
    info!("Entering game loop");
    loop {
        let frame = terminal.draw(|f| ui::draw(f, app))?;
        app.resize(frame.area);

        app.handle_event(event::read()?);
        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }
    }
}
