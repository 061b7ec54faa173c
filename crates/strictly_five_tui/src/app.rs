//! Application state and event handling.

use crate::config::UiSettings;
use crate::input::{KeyAction, key_action, move_cursor};
use crate::ui::ScreenLayout;
use crossterm::event::{Event, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use strictly_five::{ClickResult, GameController, Player, Position, SoundPlayer};
use tracing::{debug, instrument};

/// Main application state.
///
/// Wraps the game controller with what only the terminal needs: the
/// keyboard cursor and the geometry used to map mouse clicks to squares.
pub struct App<S> {
    controller: GameController<S>,
    cursor: Position,
    layout: ScreenLayout,
    hover_preview: bool,
    should_quit: bool,
}

impl<S: SoundPlayer> App<S> {
    /// Creates a new application around a fresh game.
    pub fn new(sound: S, settings: &UiSettings) -> Self {
        Self {
            controller: GameController::new(sound),
            cursor: Position::at(2, 2),
            layout: ScreenLayout::default(),
            hover_preview: *settings.hover_preview(),
            should_quit: false,
        }
    }

    /// Gets the game controller.
    pub fn controller(&self) -> &GameController<S> {
        &self.controller
    }

    /// Square under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Mark to preview on the cursor square, if it is empty and the game
    /// is still going.
    pub fn preview(&self) -> Option<Player> {
        let game = &self.controller;
        (self.hover_preview && !game.outcome().is_over() && game.board().is_empty(self.cursor))
            .then(|| game.turn())
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records the terminal area the screen was last drawn into.
    pub fn resize(&mut self, area: Rect) {
        self.layout = ScreenLayout::new(area);
    }

    /// Dispatches a terminal event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(width, height) => self.resize(Rect::new(0, 0, width, height)),
            _ => {}
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let Some(action) = key_action(key) else {
            return;
        };
        debug!(?action, "Key action");

        match action {
            KeyAction::Move(code) => self.cursor = move_cursor(self.cursor, code),
            KeyAction::Click => {
                self.click(self.cursor);
            }
            KeyAction::Reset => {
                self.press_reset();
            }
            KeyAction::Quit => self.should_quit = true,
        }
    }

    /// Handles a mouse event: moving hovers a square, a left click plays
    /// it or presses the reset button.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let (column, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved => {
                if let Some(pos) = self.layout.cell_at(column, row) {
                    self.cursor = pos;
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(pos) = self.layout.cell_at(column, row) {
                    self.cursor = pos;
                    self.click(pos);
                } else if self.layout.on_reset(column, row) {
                    self.press_reset();
                }
            }
            _ => {}
        }
    }

    /// Clicks a square.
    #[instrument(skip(self))]
    pub fn click(&mut self, pos: Position) -> ClickResult {
        let result = self.controller.handle_cell_click(pos.index());
        debug!(?result, "Square clicked");
        result
    }

    /// Presses the reset button. The button only exists once the game is
    /// over, so this does nothing before then.
    #[instrument(skip(self))]
    pub fn press_reset(&mut self) -> bool {
        if !self.controller.outcome().is_over() {
            debug!("Reset ignored, game still in progress");
            return false;
        }
        self.controller.reset();
        true
    }
}
