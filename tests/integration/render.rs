//! Screen rendering through the App, checked on a TestBackend buffer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;
use splitscope::{App, Config};

use super::common::fixtures::seeded_session;
use super::common::terminal::{buffer_contains, create_test_terminal_sized, has_cell_with_fg};

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn app() -> App {
    App::with_session(Config::default(), seeded_session(5))
}

fn render(app: &mut App) -> ratatui::buffer::Buffer {
    let mut terminal = create_test_terminal_sized(120, 36);
    terminal.draw(|f| app.draw(f)).unwrap();
    terminal.backend().buffer().clone()
}

#[test]
fn test_initial_screen() {
    let mut app = app();
    let buffer = render(&mut app);

    assert!(buffer_contains(&buffer, "Binary Search Visualization"));
    assert!(buffer_contains(&buffer, "Press g to generate an array"));
    assert!(buffer_contains(&buffer, "Step 0 of 0"));
    assert!(buffer_contains(&buffer, "In Search Range"));
    assert!(buffer_contains(&buffer, "generate"));
}

#[test]
fn test_found_search_is_drawn_green() {
    let mut app = app();
    press(&mut app, KeyCode::Char('g'));
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::End);

    let buffer = render(&mut app);
    assert!(buffer_contains(
        &buffer,
        "Binary Search Visualization - Found"
    ));
    assert!(buffer_contains(&buffer, "Found! Array["));
    assert!(buffer_contains(&buffer, "O(log n)"));
    assert!(has_cell_with_fg(&buffer, "█", Color::Green));
}

#[test]
fn test_error_status_in_header() {
    let mut app = app();
    press(&mut app, KeyCode::Char('s'));

    let buffer = render(&mut app);
    assert!(buffer_contains(&buffer, "Please generate an array first"));
}

#[test]
fn test_prompt_and_help_overlays() {
    let mut app = app();
    press(&mut app, KeyCode::Char('t'));
    let buffer = render(&mut app);
    assert!(buffer_contains(&buffer, "Search Target"));
    assert!(buffer_contains(&buffer, "Value from 1 to 100"));

    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('?'));
    let buffer = render(&mut app);
    assert!(buffer_contains(&buffer, "Help - Keybindings"));
    assert!(buffer_contains(&buffer, "REPLAY"));
}
