//! Tic-tac-toe board rendering.

use crate::app::App;
use noughts_core::{Cell, Player, Position};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

/// Renders the tic-tac-toe board with cursor and winning-line highlights.
pub fn render_board(f: &mut Frame, area: Rect, app: &App, show_cell_numbers: bool) {
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

    let highlight = app.winning_line();
    for (row, area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        render_row(f, area, app, row, highlight, show_cell_numbers);
    }
    render_separator(f, rows[1]);
    render_separator(f, rows[3]);
}

fn render_row(
    f: &mut Frame,
    area: Rect,
    app: &App,
    row: usize,
    highlight: Option<[Position; 3]>,
    show_cell_numbers: bool,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    for (col, area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        if let Some(pos) = Position::from_row_col(row, col) {
            let highlighted = highlight.is_some_and(|line| line.contains(&pos));
            render_cell(f, area, app, pos, highlighted, show_cell_numbers);
        }
    }
    render_vertical_sep(f, cols[1]);
    render_vertical_sep(f, cols[3]);
}

fn render_cell(
    f: &mut Frame,
    area: Rect,
    app: &App,
    pos: Position,
    highlighted: bool,
    show_cell_numbers: bool,
) {
    let (text, mut style) = match app.engine().cell(pos) {
        Cell::Empty if show_cell_numbers => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Empty => (" ".to_string(), Style::default()),
        Cell::Claimed(Player::X) => ("X".to_string(), Style::default().fg(Color::Blue)),
        Cell::Claimed(Player::O) => ("O".to_string(), Style::default().fg(Color::Red)),
    };

    if !app.engine().is_cell_open(pos) {
        style = style.add_modifier(Modifier::BOLD);
    } else if !app.is_cell_enabled(pos) {
        style = style.add_modifier(Modifier::DIM);
    }
    if highlighted {
        style = style.bg(Color::Green).fg(Color::Black);
    } else if pos == app.cursor() && app.notice().is_none() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

/// Returns a `width` x `height` rectangle centered in `area`.
pub(crate) fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
