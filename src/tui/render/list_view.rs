use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::note::Note;
use crate::ops::view::{search_matcher, visible_notes};
use crate::tui::app::App;
use crate::util::unicode::{display_width, truncate_to_width};

use super::helpers::push_highlighted_spans;

/// Render the note list (or the empty placeholder)
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let notes: Vec<Note> = visible_notes(&app.store).into_iter().cloned().collect();

    if notes.is_empty() {
        render_empty(frame, app, area);
        return;
    }

    // Keep the cursor on screen
    let height = area.height as usize;
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    }
    if height > 0 && app.cursor >= app.scroll_offset + height {
        app.scroll_offset = app.cursor + 1 - height;
    }

    let theme = app.theme();
    let search_re = search_matcher(app.store.search_term());
    let width = area.width as usize;

    let mut lines: Vec<Line> = Vec::new();
    for (i, note) in notes
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(height)
    {
        let is_cursor = i == app.cursor;
        let bg = if is_cursor {
            theme.selection_bg
        } else {
            theme.background
        };
        let bg_style = Style::default().bg(bg);

        let mut spans: Vec<Span> = vec![Span::styled(" ", bg_style)];

        // Checkbox
        let (mark, mark_fg) = if note.completed {
            ("[x]", theme.done)
        } else {
            ("[ ]", theme.dim)
        };
        spans.push(Span::styled(mark, Style::default().fg(mark_fg).bg(bg)));
        spans.push(Span::styled(" ", bg_style));

        // Note text, struck through once completed
        let mut text_style = if note.completed {
            Style::default()
                .fg(theme.dim)
                .bg(bg)
                .add_modifier(Modifier::CROSSED_OUT)
        } else if is_cursor {
            Style::default().fg(theme.text_bright).bg(bg)
        } else {
            Style::default().fg(theme.text).bg(bg)
        };
        if is_cursor {
            text_style = text_style.add_modifier(Modifier::BOLD);
        }
        let match_style = Style::default()
            .fg(theme.search_match_fg)
            .bg(theme.search_match_bg);

        let time = note.created.format("%H:%M").to_string();
        // " [x] " + text + gap + time + " "
        let text_budget = width.saturating_sub(5 + display_width(&time) + 3);
        let shown = truncate_to_width(&note.text, text_budget);
        push_highlighted_spans(&mut spans, &shown, text_style, match_style, search_re.as_ref());

        // Pad so the created time sits at the right edge
        let used: usize = spans.iter().map(|s| display_width(&s.content)).sum();
        let time_width = display_width(&time) + 1;
        if used + time_width < width {
            spans.push(Span::styled(" ".repeat(width - used - time_width), bg_style));
        }
        spans.push(Span::styled(time, Style::default().fg(theme.dim).bg(bg)));
        spans.push(Span::styled(" ", bg_style));

        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(theme.background));
    frame.render_widget(paragraph, area);
}

/// Centered placeholder when nothing is visible — either no notes at all or
/// none matching the current search/filter
fn render_empty(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let pad = (area.height as usize) / 3;

    let mut lines: Vec<Line> = Vec::new();
    for _ in 0..pad {
        lines.push(Line::from(""));
    }
    lines.push(Line::from("Empty...").centered());

    let paragraph =
        Paragraph::new(lines).style(Style::default().fg(theme.dim).bg(theme.background));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::store::Filter;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn empty_store_shows_placeholder() {
        let mut app = app_with_notes(&[]);
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        assert!(output.contains("Empty..."));
    }

    #[test]
    fn list_shows_notes_with_checkboxes() {
        let mut app = app_with_notes(&["Buy milk", "Call mom"]);
        let ids = app.visible_ids();
        app.store.toggle_completed(ids[0]);

        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_list_view(frame, &mut app, area);
        });

        assert!(output.contains("[x] Buy milk"));
        assert!(output.contains("[ ] Call mom"));
    }

    #[test]
    fn filtered_out_notes_do_not_render() {
        let mut app = app_with_notes(&["Buy milk", "Call mom"]);
        let ids = app.visible_ids();
        app.store.toggle_completed(ids[0]);
        app.store.set_filter(Filter::Complete);

        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_list_view(frame, &mut app, area);
        });

        assert!(output.contains("Buy milk"));
        assert!(!output.contains("Call mom"));
    }

    #[test]
    fn search_with_no_hits_shows_placeholder() {
        let mut app = app_with_notes(&["Buy milk"]);
        app.store.set_search_term("zzz".into());

        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        assert!(output.contains("Empty..."));
    }

    #[test]
    fn long_text_is_truncated_with_ellipsis() {
        let long = "a".repeat(200);
        let mut app = app_with_notes(&[long.as_str()]);

        let output = render_to_string(40, 4, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        assert!(output.contains('\u{2026}'));
    }

    #[test]
    fn scroll_follows_the_cursor() {
        let texts: Vec<String> = (0..20).map(|i| format!("note {:02}", i)).collect();
        let refs: Vec<&str> = texts.iter().map(|s| s.as_str()).collect();
        let mut app = app_with_notes(&refs);
        app.cursor = 19;

        let output = render_to_string(TERM_W, 5, |frame, area| {
            render_list_view(frame, &mut app, area);
        });

        assert!(output.contains("note 19"));
        assert!(!output.contains("note 00"));
        assert_eq!(app.scroll_offset, 15);
    }
}
