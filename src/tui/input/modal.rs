use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;
use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary};

/// The entry modal owns all keys while open. Enter applies the draft;
/// blank drafts are rejected and the modal stays open. Esc cancels without
/// clearing the draft, so reopening resumes it.
pub(super) fn handle_modal(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => {
            app.store.set_modal_open(false);
        }

        (_, KeyCode::Enter) => {
            let draft = app.store.draft().to_string();
            if app.store.add_note(&draft).is_some() {
                app.draft_cursor = 0;
                app.clamp_cursor();
            }
        }

        (_, KeyCode::Backspace) => delete_back(app),
        (_, KeyCode::Delete) => delete_forward(app),

        (_, KeyCode::Left) => {
            if let Some(b) = prev_grapheme_boundary(app.store.draft(), app.draft_cursor) {
                app.draft_cursor = b;
            }
        }
        (_, KeyCode::Right) => {
            if let Some(b) = next_grapheme_boundary(app.store.draft(), app.draft_cursor) {
                app.draft_cursor = b;
            }
        }
        (_, KeyCode::Home) => {
            app.draft_cursor = 0;
        }
        (_, KeyCode::End) => {
            app.draft_cursor = app.store.draft().len();
        }

        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => insert_char(app, c),

        _ => {}
    }
}

fn insert_char(app: &mut App, c: char) {
    let mut draft = app.store.draft().to_string();
    let at = app.draft_cursor.min(draft.len());
    draft.insert(at, c);
    app.draft_cursor = at + c.len_utf8();
    app.store.set_draft(draft);
}

fn delete_back(app: &mut App) {
    if let Some(start) = prev_grapheme_boundary(app.store.draft(), app.draft_cursor) {
        let mut draft = app.store.draft().to_string();
        draft.replace_range(start..app.draft_cursor, "");
        app.draft_cursor = start;
        app.store.set_draft(draft);
    }
}

fn delete_forward(app: &mut App) {
    if let Some(end) = next_grapheme_boundary(app.store.draft(), app.draft_cursor) {
        let mut draft = app.store.draft().to_string();
        draft.replace_range(app.draft_cursor..end, "");
        app.store.set_draft(draft);
    }
}
