//! Help dialog
//!
//! Shows contextual keyboard shortcuts

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{ActiveTab, App};
use crate::tui::layout::centered_rect_fixed;
use crate::tui::theme::Palette;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let palette = app.palette();
    let area = centered_rect_fixed(56, 22, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.background));

    let paragraph = Paragraph::new(help_lines(app.active_tab, &palette))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn heading(text: &'static str, palette: &Palette) -> Line<'static> {
    Line::from(vec![Span::styled(
        text,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(palette.accent),
    )])
}

/// Get help lines for the current tab
fn help_lines(tab: ActiveTab, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Global Keys", palette),
        Line::from(""),
        key_line("q", "Quit application"),
        key_line("?", "Show/hide help"),
        key_line("1/2/3", "Dashboard / Expenses / Add Expense"),
        key_line("Tab", "Next tab"),
        key_line("t", "Toggle light/dark theme"),
        Line::from(""),
    ];

    match tab {
        ActiveTab::Dashboard => {
            lines.push(heading("Dashboard", palette));
            lines.push(Line::from(""));
            lines.push(Line::from(
                "  Totals and the trend chart follow the active filters.",
            ));
        }
        ActiveTab::Expenses => {
            lines.push(heading("Expenses", palette));
            lines.push(Line::from(""));
            lines.push(key_line("j/k", "Move selection down/up"));
            lines.push(key_line("d/Del", "Delete selected expense"));
            lines.push(key_line("/", "Edit search and date filters"));
            lines.push(key_line("c", "Cycle category filter"));
            lines.push(key_line("C", "Clear all filters"));
            lines.push(key_line("x", "Export filtered expenses to CSV"));
        }
        ActiveTab::AddExpense => {
            lines.push(heading("Add Expense", palette));
            lines.push(Line::from(""));
            lines.push(key_line("Tab", "Next field (while editing)"));
            lines.push(key_line("Enter", "Add expense / start editing"));
            lines.push(key_line("Esc", "Stop editing"));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Esc or ? to close",
        Style::default().fg(palette.muted),
    )));

    lines
}

/// Create a key binding help line
fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:12}", key),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(description),
    ])
}
