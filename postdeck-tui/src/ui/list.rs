//! List view — post titles with a one-line body preview.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::AppState;
use crate::theme;

/// Preview length for list rows.
const PREVIEW_CHARS: usize = 50;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(format!(" Posts ({}) ", app.posts.len()))
        .title_style(theme::accent_bold());

    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        "[j/k]move [Enter]open [r]eload [q]uit",
        theme::muted(),
    )));
    lines.push(Line::from(""));

    if app.posts.is_empty() {
        lines.push(Line::from(Span::styled("No posts.", theme::muted())));
    }

    for (i, post) in app.posts.iter().enumerate() {
        let is_cursor = i == app.cursor;
        let title_style = if is_cursor {
            theme::accent().add_modifier(Modifier::REVERSED)
        } else {
            theme::text()
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{:>2}. ", post.id), theme::muted()),
            Span::styled(post.title.as_str(), title_style),
        ]));
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(preview(&post.body), theme::muted()),
        ]));
    }

    f.render_widget(Paragraph::new(lines), inner);
}

/// First `PREVIEW_CHARS` characters of the body, flattened to one line,
/// with a trailing ellipsis. Cuts on char boundaries, never mid-codepoint.
pub fn preview(body: &str) -> String {
    let flat: String = body
        .chars()
        .map(|c| if c == '\n' { ' ' } else { c })
        .take(PREVIEW_CHARS)
        .collect();
    format!("{flat}...")
}
