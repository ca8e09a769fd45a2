//! Keyboard input dispatch — global keys first, then per-view handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::app::{AppState, View};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('r') => {
            app.reload();
            return;
        }
        _ => {}
    }

    // The error screen swallows everything else until a reload.
    if app.error.is_some() {
        return;
    }

    match app.view() {
        View::List => handle_list_key(app, key),
        View::Detail => handle_detail_key(app, key),
    }
}

fn handle_list_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if !app.posts.is_empty() && app.cursor + 1 < app.posts.len() {
                app.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => {
            app.select_under_cursor();
        }
        _ => {}
    }
}

fn handle_detail_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Left => {
            app.back_to_list();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::worker::WorkerResponse;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn q_quits() {
        let (mut app, _cmd_rx) = fixtures::test_app();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let (mut app, _cmd_rx) = fixtures::test_app();
        app.apply(WorkerResponse::Posts(fixtures::ten_posts()));

        handle_key(&mut app, press(KeyCode::Char('k')));
        assert_eq!(app.cursor, 0);

        for _ in 0..30 {
            handle_key(&mut app, press(KeyCode::Char('j')));
        }
        assert_eq!(app.cursor, app.posts.len() - 1);
    }

    #[test]
    fn enter_opens_detail_and_esc_returns() {
        let (mut app, _cmd_rx) = fixtures::test_app();
        app.apply(WorkerResponse::Posts(fixtures::ten_posts()));

        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.view(), View::Detail);

        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.view(), View::List);
        assert!(app.comments.is_empty());
    }

    #[test]
    fn enter_on_empty_list_is_a_no_op() {
        let (mut app, _cmd_rx) = fixtures::test_app();
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.view(), View::List);
        assert!(app.selected.is_none());
    }

    #[test]
    fn error_screen_only_honors_reload_and_quit() {
        let (mut app, cmd_rx) = fixtures::test_app();
        app.apply(WorkerResponse::Posts(fixtures::ten_posts()));
        app.apply(WorkerResponse::FetchFailed {
            context: "posts".into(),
            message: "boom".into(),
        });
        while cmd_rx.try_recv().is_ok() {}

        // Navigation is dead on the error screen.
        handle_key(&mut app, press(KeyCode::Enter));
        assert!(app.selected.is_none());
        assert!(cmd_rx.try_recv().is_err());

        // Reload recovers.
        handle_key(&mut app, press(KeyCode::Char('r')));
        assert!(app.error.is_none());
        assert!(cmd_rx.try_recv().is_ok());
    }
}
