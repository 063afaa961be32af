//! UI rendering using ratatui.

mod board;

use crate::app::{App, RoundNotice};
use crate::config::Config;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

pub use board::render_board;

/// Draws the main UI.
pub fn draw(f: &mut Frame, app: &App, config: &Config) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Noughts - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(20)])
        .split(chunks[1]);

    render_board(f, body[0], app, *config.show_cell_numbers());
    render_sidebar(f, body[1], app);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);

    let help = Paragraph::new("Arrows + Enter or 1-9: move | Enter/R: reset after a round | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);

    if let Some(notice) = app.notice() {
        render_notice(f, notice);
    }
}

fn render_sidebar(f: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![
        Line::from(vec![
            Span::raw("Turn: "),
            Span::styled(
                app.turn_indicator().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];
    for (player, count) in app.engine().score_summary() {
        lines.push(Line::from(format!("{}: {}", player, count)));
    }

    let sidebar = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Score"));
    f.render_widget(sidebar, area);
}

fn render_notice(f: &mut Frame, notice: &RoundNotice) {
    let area = board::center_rect(f.area(), 30, 8);
    let mut lines: Vec<Line> = notice
        .message()
        .lines()
        .map(|line| Line::from(line.to_string()))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Enter] Reset",
        Style::default().fg(Color::Cyan),
    )));

    let popup = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(notice.title().as_str())
                .style(Style::default().fg(Color::White).bg(Color::Black)),
        );
    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}
