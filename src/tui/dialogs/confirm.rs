//! Delete confirmation
//!
//! Shows the expense about to be removed and waits for y/n.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::display::{format_amount, format_long_date, truncate};
use crate::models::Expense;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::theme::Palette;

/// Render the confirmation for deleting `expense`
pub fn render(frame: &mut Frame, palette: &Palette, expense: &Expense, currency: &str) {
    let area = centered_rect_fixed(52, 9, frame.area());
    frame.render_widget(Clear, area);

    let warn = Style::default().fg(Color::Yellow);
    let block = Block::default()
        .title(" Delete Expense ")
        .title_style(warn.add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(warn)
        .style(Style::default().bg(palette.background).fg(palette.foreground));

    let detail = format!(
        "{} on {} ({})",
        format_amount(expense.amount, currency),
        format_long_date(expense.date),
        expense.category
    );

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            truncate(&expense.title, 46),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(detail, Style::default().fg(palette.muted))),
        Line::from(""),
        Line::from("This cannot be undone."),
        Line::from(vec![
            Span::styled("[y]", Style::default().fg(Color::Green)),
            Span::raw(" Delete  "),
            Span::styled("[n/Esc]", Style::default().fg(Color::Red)),
            Span::raw(" Keep"),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
