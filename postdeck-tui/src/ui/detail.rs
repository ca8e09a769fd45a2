//! Detail view — one post's full body, then its comments.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    // View is Detail only when a selection exists; an out-of-range index
    // cannot happen because the selection always comes from the cursor.
    let Some(post) = app.selected_post() else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(format!(" Post {} [Esc]back ", post.id))
        .title_style(theme::accent_bold());

    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        post.title.as_str(),
        theme::accent_bold(),
    )));
    lines.push(Line::from(""));
    for body_line in post.body.lines() {
        lines.push(Line::from(Span::styled(body_line, theme::text())));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        format!("Comments ({})", app.comments.len()),
        theme::accent_bold(),
    )));
    lines.push(Line::from(""));

    if !app.comments_loaded {
        lines.push(Line::from(Span::styled(
            "Loading comments...",
            theme::warning(),
        )));
    } else if app.comments.is_empty() {
        lines.push(Line::from(Span::styled(
            "No comments available",
            theme::muted(),
        )));
    } else {
        for comment in &app.comments {
            lines.push(Line::from(vec![
                Span::styled(comment.name.as_str(), theme::positive()),
                Span::styled(format!(" ({})", comment.email), theme::muted()),
            ]));
            for body_line in comment.body.lines() {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(body_line, theme::text()),
                ]));
            }
            lines.push(Line::from(""));
        }
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
