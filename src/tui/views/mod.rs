//! TUI Views module
//!
//! Contains the three tabs (dashboard, expenses, add expense) as well as the
//! tab header and status bar.

pub mod add_expense;
pub mod dashboard;
pub mod expenses;
pub mod header;
pub mod status_bar;

use ratatui::{style::Style, widgets::Block, Frame};

use super::app::{ActiveDialog, ActiveTab, App};
use super::dialogs;
use super::layout::{top_right_rect, AppLayout};
use super::widgets::toast::ToastWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let palette = app.palette();
    let layout = AppLayout::new(frame.area());

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.foreground)),
        frame.area(),
    );

    header::render(frame, app, layout.header);

    match app.active_tab {
        ActiveTab::Dashboard => dashboard::render(frame, app, layout.main),
        ActiveTab::Expenses => expenses::render(frame, app, layout.main),
        ActiveTab::AddExpense => add_expense::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::ConfirmDelete(id) => {
            if let Some(expense) = app.session.store.get(id) {
                dialogs::confirm::render(frame, &palette, expense, &app.settings.currency_symbol);
            }
        }
        ActiveDialog::None => {}
    }

    if let Some(toast) = app.toasts.current() {
        let area = top_right_rect(44, 4, frame.area());
        frame.render_widget(ToastWidget::new(toast, &palette), area);
    }
}
