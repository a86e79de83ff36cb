use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::view::visible_notes;
use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts its dismiss keys
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    match (key.modifiers, key.code) {
        (_, KeyCode::Char('q')) | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            app.should_quit = true;
        }

        (_, KeyCode::Char('j') | KeyCode::Down) => move_cursor(app, 1),
        (_, KeyCode::Char('k') | KeyCode::Up) => move_cursor(app, -1),
        (_, KeyCode::Char('g') | KeyCode::Home) => {
            app.cursor = 0;
        }
        (_, KeyCode::Char('G') | KeyCode::End) => jump_bottom(app),

        (_, KeyCode::Char(' ') | KeyCode::Enter) => toggle_cursor_note(app),
        (_, KeyCode::Char('f')) => toggle_filter(app),
        (_, KeyCode::Char('d')) => {
            let on = !app.store.dark_mode();
            app.store.set_dark_mode(on);
        }
        (_, KeyCode::Char('a') | KeyCode::Char('+')) => open_modal(app),
        (_, KeyCode::Char('/')) => enter_search(app),
        (_, KeyCode::Esc) => clear_search(app),
        (_, KeyCode::Char('?')) => {
            app.show_help = true;
        }

        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: i64) {
    let len = visible_notes(&app.store).len();
    if len == 0 {
        return;
    }
    let moved = app.cursor as i64 + delta;
    app.cursor = moved.clamp(0, len as i64 - 1) as usize;
}

fn jump_bottom(app: &mut App) {
    let len = visible_notes(&app.store).len();
    if len > 0 {
        app.cursor = len - 1;
    }
}

/// Toggle completion of the note under the cursor. Under a completion
/// filter the note may leave the view, so the cursor re-clamps.
fn toggle_cursor_note(app: &mut App) {
    if let Some(id) = app.cursor_note_id() {
        app.store.toggle_completed(id);
        app.clamp_cursor();
    }
}

fn toggle_filter(app: &mut App) {
    let next = app.store.filter().toggled();
    app.store.set_filter(next);
    app.cursor = 0;
    app.scroll_offset = 0;
}

fn open_modal(app: &mut App) {
    app.store.set_modal_open(true);
    // A draft kept from a cancelled modal resumes with the cursor at its end
    app.draft_cursor = app.store.draft().len();
}

fn enter_search(app: &mut App) {
    app.search_restore = app.store.search_term().to_string();
    app.mode = Mode::Search;
}

fn clear_search(app: &mut App) {
    if !app.store.search_term().is_empty() {
        app.store.set_search_term(String::new());
        app.clamp_cursor();
    }
}
