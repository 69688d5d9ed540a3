//! Rendering tests against ratatui's in-memory backend.

use crossterm::event::KeyCode;
use ratatui::{Terminal, backend::TestBackend};
use tictactoe_tui::{App, TuiConfig, ui};

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_setup_screen_shows_default_names() {
    let app = App::new(&TuiConfig::default());
    let screen = render(&app);
    assert!(screen.contains("Tic Tac Toe"));
    assert!(screen.contains("Player one (X)"));
    assert!(screen.contains("Player two (O)"));
    assert!(screen.contains("Player 2"));
}

#[test]
fn test_board_screen_shows_markers_and_status() {
    let mut app = App::new(&TuiConfig::default());
    for c in "Ada".chars() {
        app.handle_key(KeyCode::Char(c));
    }
    app.handle_key(KeyCode::Enter);
    app.handle_key(KeyCode::Enter);
    app.handle_key(KeyCode::Char('1'));

    let screen = render(&app);
    assert!(screen.contains(" X "));
    assert!(screen.contains("Player 2's turn"));
    assert!(!screen.contains("Ada's turn"));
}

#[test]
fn test_finished_screen_offers_restart() {
    let mut app = App::new(&TuiConfig::default());
    app.start_game();
    for index in [0, 3, 1, 4, 2] {
        app.play_index(index);
    }

    let screen = render(&app);
    assert!(screen.contains("Player 1 wins!"));
    assert!(screen.contains("r: new match"));
}
