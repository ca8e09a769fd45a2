//! Style tokens — neon accents on the terminal's default background.

use ratatui::style::{Color, Modifier, Style};

/// Electric cyan — focus, highlights.
pub fn accent() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

/// Steel gray — hints, disabled, secondary text.
pub fn muted() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Primary text.
pub fn text() -> Style {
    Style::default().fg(Color::White)
}

/// In-progress operations.
pub fn warning() -> Style {
    Style::default().fg(Color::Yellow)
}

/// Failures.
pub fn negative() -> Style {
    Style::default().fg(Color::Red)
}

/// Success, fresh data.
pub fn positive() -> Style {
    Style::default().fg(Color::Green)
}
