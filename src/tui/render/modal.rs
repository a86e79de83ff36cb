use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::util::unicode::{display_width, next_grapheme_boundary};

use super::helpers::centered_rect;

const MODAL_WIDTH: u16 = 46;
const MODAL_HEIGHT: u16 = 5;

/// Render the entry modal: bordered popup with the draft input line and
/// key hints
pub fn render_modal(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let rect = centered_rect(area, MODAL_WIDTH, MODAL_HEIGHT);

    frame.render_widget(Clear, rect);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border).bg(theme.surface))
        .style(Style::default().bg(theme.surface))
        .title(Span::styled(
            " NEW NOTE ",
            Style::default()
                .fg(theme.accent)
                .bg(theme.surface)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);
    if inner.height == 0 {
        return;
    }

    // Input row
    let input_area = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), 1);
    render_input(frame, app, input_area);

    // Hint row at the bottom of the popup
    if inner.height >= 3 {
        let hint_area = Rect::new(inner.x + 1, inner.y + inner.height - 1, input_area.width, 1);
        let hint = Paragraph::new("Enter apply  Esc cancel")
            .style(Style::default().fg(theme.dim).bg(theme.surface))
            .right_aligned();
        frame.render_widget(hint, hint_area);
    }
}

fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let bg = theme.surface;
    let width = area.width as usize;

    let draft = app.store.draft();
    if draft.is_empty() {
        let placeholder = Paragraph::new(Line::from(vec![
            Span::styled("\u{258C}", Style::default().fg(theme.accent).bg(bg)),
            Span::styled(
                "Input your note...",
                Style::default().fg(theme.dim).bg(bg),
            ),
        ]))
        .style(Style::default().bg(bg));
        frame.render_widget(placeholder, area);
        return;
    }

    let at = app.draft_cursor.min(draft.len());
    let mut before = &draft[..at];
    let after = &draft[at..];

    // Slide the window so the cursor stays visible on long drafts
    while display_width(before) > width.saturating_sub(2) {
        match next_grapheme_boundary(before, 0) {
            Some(b) => before = &before[b..],
            None => break,
        }
    }

    let text_style = Style::default().fg(theme.text_bright).bg(bg);
    let shown_after_width = width.saturating_sub(display_width(before) + 1);
    let mut spans = vec![
        Span::styled(before.to_string(), text_style),
        Span::styled("\u{258C}", Style::default().fg(theme.accent).bg(bg)),
    ];
    if !after.is_empty() && shown_after_width > 0 {
        let mut shown_after = after.to_string();
        if display_width(&shown_after) > shown_after_width {
            shown_after = crate::util::unicode::truncate_to_width(after, shown_after_width);
        }
        spans.push(Span::styled(shown_after, text_style));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn modal_shows_title_placeholder_and_hints() {
        let mut app = app_with_notes(&[]);
        app.store.set_modal_open(true);

        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_modal(frame, &app, area);
        });

        assert!(output.contains("NEW NOTE"));
        assert!(output.contains("Input your note..."));
        assert!(output.contains("Enter apply  Esc cancel"));
    }

    #[test]
    fn modal_shows_the_draft_with_cursor() {
        let mut app = app_with_notes(&[]);
        app.store.set_modal_open(true);
        app.store.set_draft("Buy milk".into());
        app.draft_cursor = app.store.draft().len();

        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_modal(frame, &app, area);
        });

        assert!(output.contains("Buy milk\u{258C}"));
        assert!(!output.contains("Input your note..."));
    }

    #[test]
    fn cursor_mid_draft_splits_the_text() {
        let mut app = app_with_notes(&[]);
        app.store.set_modal_open(true);
        app.store.set_draft("abcd".into());
        app.draft_cursor = 2;

        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_modal(frame, &app, area);
        });

        assert!(output.contains("ab\u{258C}cd"));
    }

    #[test]
    fn long_draft_keeps_cursor_visible() {
        let mut app = app_with_notes(&[]);
        app.store.set_modal_open(true);
        let long = "x".repeat(120);
        app.store.set_draft(long.clone());
        app.draft_cursor = long.len();

        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_modal(frame, &app, area);
        });

        assert!(output.contains('\u{258C}'));
    }
}
