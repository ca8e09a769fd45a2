//! Top-level layout — one full-screen view plus a 1-line status bar.
//!
//! Exactly one of four screens shows at a time: startup loading, error,
//! post list, or post detail. The error screen replaces everything, per the
//! single "request failed" recovery model.

pub mod detail;
pub mod list;
pub mod status_bar;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{AppState, View};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let main_area = chunks[0];
    let status_area = chunks[1];

    if let Some(msg) = &app.error {
        draw_error(f, main_area, msg);
    } else if app.loading && app.posts.is_empty() {
        draw_startup(f, main_area);
    } else {
        match app.view() {
            View::List => list::render(f, main_area, app),
            View::Detail => detail::render(f, main_area, app),
        }
    }

    status_bar::render(f, status_area, app);
}

fn draw_startup(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Postdeck ")
        .title_style(theme::accent_bold());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled("Loading posts...", theme::warning())),
    ];
    f.render_widget(Paragraph::new(text).block(block), area);
}

fn draw_error(f: &mut Frame, area: Rect, msg: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::negative())
        .title(" Error ")
        .title_style(theme::negative());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(format!("Error: {msg}"), theme::negative())),
        Line::from(""),
        Line::from(Span::styled(
            "Press r to reload, q to quit.",
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(text).block(block), area);
}
