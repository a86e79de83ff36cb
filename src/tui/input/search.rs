use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

/// Search edits the store's term in place, so the list re-filters on every
/// keystroke. Enter keeps the term; Esc restores the one that was active
/// when the search began.
pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Enter) => {
            app.mode = Mode::Navigate;
        }

        (_, KeyCode::Esc) => {
            app.store.set_search_term(app.search_restore.clone());
            app.mode = Mode::Navigate;
            app.clamp_cursor();
        }

        (_, KeyCode::Backspace) => {
            let mut term = app.store.search_term().to_string();
            term.pop();
            app.store.set_search_term(term);
            app.clamp_cursor();
        }

        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            let mut term = app.store.search_term().to_string();
            term.push(c);
            app.store.set_search_term(term);
            app.clamp_cursor();
        }

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use crate::model::config::Config;
    use crate::ops::view::visible_notes;
    use crate::tui::app::{App, Mode};
    use crate::tui::input::{handle_key, press, type_str};
    use crossterm::event::KeyCode;

    fn searching_app(texts: &[&str]) -> App {
        let mut app = App::new(&Config::default());
        for text in texts {
            app.store.add_note(text);
        }
        handle_key(&mut app, press(KeyCode::Char('/')));
        app
    }

    #[test]
    fn typing_filters_live() {
        let mut app = searching_app(&["Shop", "eat"]);
        type_str(&mut app, "s");

        assert_eq!(app.store.search_term(), "s");
        let visible: Vec<&str> = visible_notes(&app.store)
            .iter()
            .map(|n| n.text.as_str())
            .collect();
        assert_eq!(visible, vec!["Shop"]);
    }

    #[test]
    fn backspace_widens_the_view_again() {
        let mut app = searching_app(&["Shop", "eat"]);
        type_str(&mut app, "sh");
        handle_key(&mut app, press(KeyCode::Backspace));
        handle_key(&mut app, press(KeyCode::Backspace));

        assert_eq!(app.store.search_term(), "");
        assert_eq!(visible_notes(&app.store).len(), 2);
    }

    #[test]
    fn enter_keeps_the_term() {
        let mut app = searching_app(&["Shop", "eat"]);
        type_str(&mut app, "sh");
        handle_key(&mut app, press(KeyCode::Enter));

        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.store.search_term(), "sh");
    }

    #[test]
    fn esc_restores_the_previous_term() {
        let mut app = searching_app(&["Shop", "eat"]);
        type_str(&mut app, "sh");
        handle_key(&mut app, press(KeyCode::Enter));

        // Second search session, then cancel
        handle_key(&mut app, press(KeyCode::Char('/')));
        type_str(&mut app, "xyz");
        assert_eq!(app.store.search_term(), "shxyz");
        handle_key(&mut app, press(KeyCode::Esc));

        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.store.search_term(), "sh");
    }

    #[test]
    fn cursor_clamps_while_the_view_shrinks() {
        let mut app = searching_app(&["alpha", "beta", "gamma"]);
        app.cursor = 2;
        type_str(&mut app, "alp");
        assert_eq!(app.cursor, 0);
    }
}
