//! End-to-end tests: terminal events in, rendered screen out.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{Terminal, backend::TestBackend, layout::Rect};
use strictly_five::{GameOutcome, Player, Position, Silent, Square, StrikeClass};
use strictly_five_tui::ui::{self, RESET_LABEL, ScreenLayout};
use strictly_five_tui::{App, Settings};

const WIDTH: u16 = 60;
const HEIGHT: u16 = 32;

fn new_app() -> App<Silent> {
    App::new(Silent, Settings::default().ui())
}

/// Draws the app on a test terminal and returns the screen, one string per row.
fn render(app: &mut App<Silent>) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    let area = terminal.draw(|f| ui::draw(f, app)).unwrap().area;
    app.resize(area);

    let buffer = terminal.backend().buffer();
    (0..HEIGHT)
        .map(|y| (0..WIDTH).map(|x| buffer[(x, y)].symbol()).collect())
        .collect()
}

fn screen_contains(screen: &[String], text: &str) -> bool {
    screen.iter().any(|line| line.contains(text))
}

fn layout() -> ScreenLayout {
    ScreenLayout::new(Rect::new(0, 0, WIDTH, HEIGHT))
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn click_square(app: &mut App<Silent>, index: usize) {
    let rect = layout().cell(Position::from_index(index).unwrap());
    app.handle_event(mouse(
        MouseEventKind::Down(MouseButton::Left),
        rect.x + 2,
        rect.y + 1,
    ));
}

fn key(app: &mut App<Silent>, code: KeyCode) {
    app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

/// Character at the spot where a square's mark is drawn.
fn mark_at(screen: &[String], pos: Position) -> char {
    let rect = layout().cell(pos);
    screen[(rect.y + 1) as usize]
        .chars()
        .nth((rect.x + 3) as usize)
        .unwrap()
}

#[test]
fn test_initial_screen() {
    let mut app = new_app();
    let screen = render(&mut app);

    assert!(screen_contains(&screen, "Tic Tac Toe"));
    assert!(screen_contains(&screen, "Player X's turn"));
    assert!(!screen_contains(&screen, RESET_LABEL));
    // The cursor starts in the centre and previews X there.
    assert_eq!(mark_at(&screen, Position::at(2, 2)), 'X');
    assert_eq!(app.controller().board().occupied(), 0);
}

#[test]
fn test_grid_lines_skip_outer_edges() {
    let mut app = new_app();
    let screen = render(&mut app);
    let layout = layout();

    let inner = layout.cell(Position::at(0, 0));
    let right_edge = (inner.x + inner.width - 1) as usize;
    assert_eq!(screen[inner.y as usize].chars().nth(right_edge), Some('│'));

    let corner = layout.cell(Position::at(4, 4));
    let last_col = (corner.x + corner.width - 1) as usize;
    assert_eq!(screen[corner.y as usize].chars().nth(last_col), Some(' '));
    let last_row = (corner.y + corner.height - 1) as usize;
    assert_eq!(screen[last_row].chars().nth(corner.x as usize), Some(' '));
}

#[test]
fn test_mouse_click_places_mark() {
    let mut app = new_app();
    render(&mut app);

    click_square(&mut app, 0);
    let screen = render(&mut app);

    assert_eq!(
        app.controller().board().get(Position::at(0, 0)),
        Square::Occupied(Player::X)
    );
    assert_eq!(mark_at(&screen, Position::at(0, 0)), 'X');
    assert!(screen_contains(&screen, "Player O's turn"));
}

#[test]
fn test_status_line_shows_last_move() {
    let mut app = new_app();
    render(&mut app);

    click_square(&mut app, 7);
    let screen = render(&mut app);
    assert!(screen_contains(
        &screen,
        "Player O's turn · X played row 2, column 3"
    ));

    click_square(&mut app, 19);
    let screen = render(&mut app);
    assert!(screen_contains(
        &screen,
        "Player X's turn · O played row 4, column 5"
    ));
}

#[test]
fn test_status_line_after_win_names_final_move() {
    let mut app = new_app();
    render(&mut app);
    for index in [0, 5, 1, 6, 2, 7, 3, 8, 4] {
        click_square(&mut app, index);
    }
    let screen = render(&mut app);
    assert!(screen_contains(&screen, "X played row 1, column 5"));
}

#[test]
fn test_mouse_hover_moves_preview() {
    let mut app = new_app();
    render(&mut app);

    let rect = layout().cell(Position::at(4, 0));
    app.handle_event(mouse(MouseEventKind::Moved, rect.x + 1, rect.y + 1));
    let screen = render(&mut app);

    assert_eq!(app.cursor(), Position::at(4, 0));
    assert_eq!(mark_at(&screen, Position::at(4, 0)), 'X');
    assert_eq!(mark_at(&screen, Position::at(2, 2)), ' ');
}

#[test]
fn test_preview_can_be_disabled() {
    let settings = Settings::from_toml("[ui]\nhover_preview = false\n").unwrap();
    let mut app = App::new(Silent, settings.ui());
    let screen = render(&mut app);
    assert_eq!(mark_at(&screen, Position::at(2, 2)), ' ');
}

#[test]
fn test_keyboard_play() {
    let mut app = new_app();
    render(&mut app);

    key(&mut app, KeyCode::Up);
    key(&mut app, KeyCode::Left);
    key(&mut app, KeyCode::Enter);
    key(&mut app, KeyCode::Enter);

    assert_eq!(
        app.controller().board().get(Position::at(1, 1)),
        Square::Occupied(Player::X)
    );
    assert_eq!(app.controller().board().occupied(), 1, "second press is a no-op");
    assert_eq!(app.controller().turn(), Player::O);
}

#[test]
fn test_win_shows_banner_strike_and_reset() {
    let mut app = new_app();
    render(&mut app);
    for index in [0, 5, 1, 6, 2, 7, 3, 8, 4] {
        click_square(&mut app, index);
    }
    let screen = render(&mut app);

    assert_eq!(app.controller().outcome(), GameOutcome::XWins);
    assert_eq!(app.controller().strike(), Some(StrikeClass::Row1));
    assert!(screen_contains(&screen, "Player X Wins!"));
    assert!(screen_contains(&screen, RESET_LABEL));
    assert!(!screen_contains(&screen, "turn"));

    let row = &screen[(layout().cell(Position::at(0, 0)).y + 1) as usize];
    assert!(row.contains("━━━"));
    assert_eq!(row.matches('X').count(), 5);
}

#[test]
fn test_board_frozen_after_win() {
    let mut app = new_app();
    render(&mut app);
    for index in [0, 5, 1, 6, 2, 7, 3, 8, 4] {
        click_square(&mut app, index);
    }
    click_square(&mut app, 24);
    assert_eq!(app.controller().board().occupied(), 9);
}

#[test]
fn test_reset_only_after_game_over() {
    let mut app = new_app();
    render(&mut app);
    click_square(&mut app, 12);

    key(&mut app, KeyCode::Char('r'));
    assert_eq!(app.controller().board().occupied(), 1);

    let reset = layout().reset;
    app.handle_event(mouse(
        MouseEventKind::Down(MouseButton::Left),
        reset.x + 1,
        reset.y + 1,
    ));
    assert_eq!(app.controller().board().occupied(), 1);
}

#[test]
fn test_reset_button_starts_new_game() {
    let mut app = new_app();
    render(&mut app);
    for index in [0, 5, 1, 6, 2, 7, 3, 8, 4] {
        click_square(&mut app, index);
    }
    render(&mut app);

    let reset = layout().reset;
    app.handle_event(mouse(
        MouseEventKind::Down(MouseButton::Left),
        reset.x + 4,
        reset.y + 1,
    ));
    let screen = render(&mut app);

    assert_eq!(app.controller().outcome(), GameOutcome::InProgress);
    assert_eq!(app.controller().strike(), None);
    assert_eq!(app.controller().board().occupied(), 0);
    assert!(screen_contains(&screen, "Player X's turn"));
    assert!(!screen_contains(&screen, RESET_LABEL));
    assert!(!screen.iter().any(|line| line.contains('━')));
}

#[test]
fn test_draw_banner() {
    let mut app = new_app();
    render(&mut app);
    let x = [0, 2, 4, 5, 7, 9, 11, 13, 16, 18, 20, 22, 24];
    let o = [1, 3, 6, 8, 10, 12, 14, 15, 17, 19, 21, 23];
    for i in 0..x.len() {
        click_square(&mut app, x[i]);
        if let Some(&index) = o.get(i) {
            click_square(&mut app, index);
        }
    }
    let screen = render(&mut app);

    assert_eq!(app.controller().outcome(), GameOutcome::Draw);
    assert!(screen_contains(&screen, "It's a Draw!"));
    assert!(screen_contains(&screen, RESET_LABEL));

    key(&mut app, KeyCode::Char('r'));
    assert_eq!(app.controller().outcome(), GameOutcome::InProgress);
}

#[test]
fn test_quit_keys() {
    let mut app = new_app();
    key(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}
