//! UI rendering for the timer TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::engine::SessionKind;
use crate::tui::app::App;

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    // Create layout: header, countdown, progress, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Countdown
            Constraint::Length(3), // Progress
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_countdown(frame, app, chunks[1]);
    render_progress(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);
}

/// Accent color for a session kind.
const fn kind_color(kind: SessionKind) -> Color {
    match kind {
        SessionKind::Work => Color::Red,
        SessionKind::ShortBreak => Color::Green,
        SessionKind::LongBreak => Color::Cyan,
    }
}

/// Render the header.
fn render_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let timer = app.timer();
    let title = format!(
        " {} (sessions completed: {}) ",
        timer.kind(),
        timer.completed_work_sessions()
    );

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(kind_color(timer.kind()))
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(kind_color(timer.kind()))),
        );

    frame.render_widget(header, area);
}

/// Render the countdown display.
fn render_countdown(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let timer = app.timer();

    let state_line = if timer.is_running() {
        Line::from(Span::styled("▶ running", Style::default().fg(Color::White)))
    } else {
        Line::from(Span::styled(
            "⏸ paused",
            Style::default().fg(Color::DarkGray),
        ))
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            timer.format_remaining(),
            Style::default()
                .fg(kind_color(timer.kind()))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        state_line,
        Line::from(Span::styled(
            format!("Up next: {}", timer.next_kind()),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let countdown = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    frame.render_widget(countdown, area);
}

/// Render the progress gauge.
fn render_progress(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let timer = app.timer();

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(kind_color(timer.kind())))
        .ratio(timer.progress().clamp(0.0, 1.0))
        .label(timer.format_remaining());

    frame.render_widget(gauge, area);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status_text = app
        .status
        .as_deref()
        .unwrap_or("space:start/pause | r:reset | s:skip | ?:help | q:quit");

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}
