//! Dashboard view
//!
//! Summary cards over the filtered expenses and a line chart of the trend.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::display::format_amount;
use crate::reports::TrendSeries;
use crate::tui::app::App;
use crate::tui::layout::DashboardLayout;
use crate::tui::theme::Palette;

/// Render the dashboard
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let layout = DashboardLayout::new(area);
    let summary = app.session.summary();
    let symbol = &app.settings.currency_symbol;

    let cards = [
        ("Total Expenses", format_amount(summary.total, symbol)),
        ("Number of Expenses", summary.count.to_string()),
        ("Average Expense", format_amount(summary.average, symbol)),
    ];

    for ((title, value), area) in cards.into_iter().zip(layout.cards) {
        render_card(frame, &palette, title, value, area);
    }

    render_trend(frame, &palette, &app.session.trend(), layout.chart);
}

fn render_card(frame: &mut Frame, palette: &Palette, title: &str, value: String, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(palette.muted))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));

    let text = Paragraph::new(Line::from(Span::styled(
        value,
        Style::default()
            .fg(palette.foreground)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(block);

    frame.render_widget(text, area);
}

fn render_trend(frame: &mut Frame, palette: &Palette, series: &TrendSeries, area: Rect) {
    let block = Block::default()
        .title(" Expense Trend ")
        .title_style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));

    let Some((low, high)) = series.bounds() else {
        let text = Paragraph::new("No expenses to chart")
            .style(Style::default().fg(palette.muted))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(text, area);
        return;
    };

    let data: Vec<(f64, f64)> = series
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.amount))
        .collect();

    let x_max = (series.len().saturating_sub(1)).max(1) as f64;
    let y_min = low.min(0.0);
    let y_max = if high > y_min { high * 1.1 } else { y_min + 1.0 };

    let dataset = Dataset::default()
        .name("Amount")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(palette.accent))
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(palette.muted))
                .bounds([0.0, x_max])
                .labels(x_labels(series)),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(palette.muted))
                .bounds([y_min, y_max])
                .labels(vec![
                    Span::raw(format!("{:.0}", y_min)),
                    Span::raw(format!("{:.0}", (y_min + y_max) / 2.0)),
                    Span::raw(format!("{:.0}", y_max)),
                ]),
        );

    frame.render_widget(chart, area);
}

/// First, middle and last date labels
fn x_labels(series: &TrendSeries) -> Vec<Span<'static>> {
    let points = &series.points;
    match points.len() {
        0 => Vec::new(),
        1 => vec![Span::raw(points[0].label.clone())],
        2 => vec![
            Span::raw(points[0].label.clone()),
            Span::raw(points[1].label.clone()),
        ],
        n => vec![
            Span::raw(points[0].label.clone()),
            Span::raw(points[n / 2].label.clone()),
            Span::raw(points[n - 1].label.clone()),
        ],
    }
}
