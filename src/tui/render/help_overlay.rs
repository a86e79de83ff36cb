use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::helpers::centered_rect;

const KEYS: &[(&str, &str)] = &[
    ("j / k", "move cursor"),
    ("g / G", "jump to top / bottom"),
    ("space", "toggle completion"),
    ("a", "add a note"),
    ("/", "search"),
    ("f", "filter All / Complete"),
    ("d", "dark / light theme"),
    ("esc", "clear search"),
    ("q", "quit"),
];

/// Render the help overlay listing the key bindings
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    // Bindings + blank + footer, inside the border
    let height = (KEYS.len() + 4) as u16;
    let rect = centered_rect(area, 38, height);

    frame.render_widget(Clear, rect);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border).bg(theme.surface))
        .style(Style::default().bg(theme.surface))
        .title(Span::styled(
            " HELP ",
            Style::default()
                .fg(theme.accent)
                .bg(theme.surface)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let mut lines: Vec<Line> = Vec::new();
    for (key, desc) in KEYS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<7}", key),
                Style::default().fg(theme.accent).bg(theme.surface),
            ),
            Span::styled(
                desc.to_string(),
                Style::default().fg(theme.text).bg(theme.surface),
            ),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(
            "? or Esc to close",
            Style::default().fg(theme.dim).bg(theme.surface),
        ))
        .centered(),
    );

    let paragraph = Paragraph::new(lines).style(Style::default().bg(theme.surface));
    frame.render_widget(paragraph, inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn help_lists_the_bindings() {
        let app = app_with_notes(&[]);
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_help_overlay(frame, &app, area);
        });

        assert!(output.contains("HELP"));
        assert!(output.contains("toggle completion"));
        assert!(output.contains("dark / light theme"));
        assert!(output.contains("? or Esc to close"));
    }
}
