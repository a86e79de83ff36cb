use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::view::visible_notes;
use crate::tui::app::{App, Mode};
use crate::util::unicode::display_width;

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let bg = theme.background;
    let width = area.width as usize;

    let mut spans: Vec<Span> = Vec::new();

    match app.mode {
        Mode::Search => {
            // Search prompt: /term▌
            spans.push(Span::styled(
                format!(" /{}", app.store.search_term()),
                Style::default().fg(theme.text_bright).bg(bg),
            ));
            spans.push(Span::styled(
                "\u{258C}",
                Style::default().fg(theme.accent).bg(bg),
            ));
            spans.push(Span::styled(
                "  Enter keep  Esc cancel",
                Style::default().fg(theme.dim).bg(bg),
            ));
        }
        Mode::Navigate => {
            if !app.store.search_term().is_empty() {
                spans.push(Span::styled(
                    format!(" /{}", app.store.search_term()),
                    Style::default().fg(theme.dim).bg(bg),
                ));
                spans.push(Span::styled("  ", Style::default().bg(bg)));
            }
            spans.push(Span::styled(
                " a add  space toggle  / search  f filter  d theme  ? help  q quit",
                Style::default().fg(theme.dim).bg(bg),
            ));
        }
    }

    // Counts, right-aligned: visible/total plus how many are done
    let visible = visible_notes(&app.store).len();
    let counts = format!(
        "{}/{} \u{00B7} {} done ",
        visible,
        app.store.len(),
        app.store.completed_count()
    );
    let used: usize = spans.iter().map(|s| display_width(&s.content)).sum();
    let counts_width = display_width(&counts);
    if used + counts_width < width {
        spans.push(Span::styled(
            " ".repeat(width - used - counts_width),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(
            counts,
            Style::default().fg(theme.dim).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn navigate_mode_shows_hints_and_counts() {
        let mut app = app_with_notes(&["a", "b", "c"]);
        let ids = app.visible_ids();
        app.store.toggle_completed(ids[0]);

        let output = render_to_string(80, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });

        assert!(output.contains("a add"));
        assert!(output.contains("q quit"));
        assert!(output.contains("3/3 \u{00B7} 1 done"));
    }

    #[test]
    fn search_mode_shows_prompt_and_live_count() {
        let mut app = app_with_notes(&["Shop", "eat"]);
        app.mode = Mode::Search;
        app.store.set_search_term("s".into());

        let output = render_to_string(80, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });

        assert!(output.contains("/s\u{258C}"));
        assert!(output.contains("1/2"));
    }

    #[test]
    fn kept_search_term_stays_visible_in_navigate() {
        let mut app = app_with_notes(&["Shop", "eat"]);
        app.store.set_search_term("shop".into());

        let output = render_to_string(80, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });

        assert!(output.contains("/shop"));
    }
}
