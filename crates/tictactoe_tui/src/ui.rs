//! Stateless UI rendering.

use crate::app::{App, NameField, Screen};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{Cell, Marker, Position};

/// Renders the whole screen for the current app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Body
            Constraint::Length(3), // Status
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    match app.screen() {
        Screen::Setup => draw_setup(frame, chunks[1], app),
        Screen::Playing => draw_board(frame, chunks[1], app),
    }

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let hints = Paragraph::new(key_hints(app))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(hints, chunks[3]);
}

fn key_hints(app: &App) -> &'static str {
    match app.screen() {
        Screen::Setup => "Type names, Tab to switch, Enter to start, Esc to quit",
        Screen::Playing if app.engine().is_over() => "r: new match   q: quit",
        Screen::Playing => "Arrows/hjkl: move   Enter/Space or 1-9: play   q: quit",
    }
}

fn draw_setup(frame: &mut Frame, area: Rect, app: &App) {
    let form = center_rect(area, 40, 6);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(form);

    for (row, field) in rows.iter().zip([NameField::PlayerOne, NameField::PlayerTwo]) {
        draw_name_input(frame, *row, app, field);
    }
}

fn draw_name_input(frame: &mut Frame, area: Rect, app: &App, field: NameField) {
    let (label, marker) = match field {
        NameField::PlayerOne => ("Player one", Marker::X),
        NameField::PlayerTwo => ("Player two", Marker::O),
    };
    let focused = app.focus() == field;
    let typed = app.name_input(field);

    let text = if typed.is_empty() && !focused {
        Span::styled(app.default_name(field), Style::default().fg(Color::DarkGray))
    } else if focused {
        Span::raw(format!("{}_", typed))
    } else {
        Span::raw(typed)
    };
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let input = Paragraph::new(Line::from(text)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!("{} ({})", label, marker)),
    );
    frame.render_widget(input, area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], app, pos);
        }
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let engine = app.engine();
    let (symbol, base_style) = match engine.board().get(pos) {
        Cell::Empty => (
            format!(" {} ", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Marked(Marker::X) => (
            " X ".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Marked(Marker::O) => (
            " O ".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let on_winning_line = engine
        .winning_line()
        .is_some_and(|line| line.contains(&pos));
    let style = if on_winning_line {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if pos == app.cursor() && !engine.is_over() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph =
        Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(38)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
