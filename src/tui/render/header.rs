use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::store::Filter;
use crate::tui::app::App;
use crate::util::unicode::display_width;

/// Render the header: title row with filter and theme indicators, plus a
/// separator line below
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1), // separator
        ])
        .split(area);

    render_title_row(frame, app, chunks[0]);
    render_separator(frame, app, chunks[1]);
}

fn render_title_row(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let bg = theme.background;
    let bg_style = Style::default().bg(bg);
    let width = area.width as usize;

    let mut spans: Vec<Span> = vec![
        Span::styled(" ", bg_style),
        Span::styled("\u{276F}", Style::default().fg(theme.accent).bg(bg)),
        Span::styled(
            " TODO LIST",
            Style::default()
                .fg(theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    // Right side: filter state and theme indicator
    let filter = app.store.filter();
    let filter_label = format!("{} \u{25BE}", filter.label());
    let theme_label = if app.store.dark_mode() {
        "\u{263E} dark"
    } else {
        "\u{2600} light"
    };

    let filter_style = if filter == Filter::All {
        Style::default().fg(theme.dim).bg(bg)
    } else {
        Style::default().fg(theme.accent).bg(bg)
    };

    let right_width = display_width(&filter_label) + 2 + display_width(theme_label) + 1;
    let left_width: usize = spans.iter().map(|s| display_width(&s.content)).sum();
    if left_width + right_width < width {
        spans.push(Span::styled(
            " ".repeat(width - left_width - right_width),
            bg_style,
        ));
        spans.push(Span::styled(filter_label, filter_style));
        spans.push(Span::styled("  ", bg_style));
        spans.push(Span::styled(
            theme_label,
            Style::default().fg(theme.dim).bg(bg),
        ));
        spans.push(Span::styled(" ", bg_style));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(bg_style);
    frame.render_widget(paragraph, area);
}

fn render_separator(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let line = "\u{2500}".repeat(area.width as usize);
    let paragraph = Paragraph::new(line)
        .style(Style::default().fg(theme.border).bg(theme.background));
    frame.render_widget(paragraph, area);
}
