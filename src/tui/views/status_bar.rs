//! Status bar view
//!
//! Shows the visible/total counts, the input mode and key hints

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, InputMode};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let visible = app.filtered().len();
    let total = app.session.store.len();

    let mut spans = vec![Span::styled(
        format!(" {} of {} expenses", visible, total),
        Style::default().fg(palette.foreground),
    )];

    if !app.session.filter.is_empty() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            "filtered",
            Style::default().fg(palette.accent),
        ));
    }

    spans.push(Span::raw(" │ "));
    spans.push(Span::styled(
        format!("{} theme", app.theme),
        Style::default().fg(palette.muted),
    ));

    if app.input_mode == InputMode::Editing {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            "EDITING",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ));
    }

    spans.push(Span::styled(
        "  ?:help  t:theme  q:quit",
        Style::default().fg(palette.muted),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.background));
    frame.render_widget(status, area);
}
