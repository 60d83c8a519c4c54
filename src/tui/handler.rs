//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, ActiveTab, App, InputMode};
use super::event::Event;
use super::views::{add_expense, expenses};

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.toasts.prune(Instant::now());
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Editing => handle_editing_key(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Global keys (work on every tab)
    match key.code {
        KeyCode::Char('q') => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
            return Ok(());
        }
        KeyCode::Char('1') => {
            app.switch_tab(ActiveTab::Dashboard);
            return Ok(());
        }
        KeyCode::Char('2') => {
            app.switch_tab(ActiveTab::Expenses);
            return Ok(());
        }
        KeyCode::Char('3') => {
            app.switch_tab(ActiveTab::AddExpense);
            return Ok(());
        }
        KeyCode::Tab => {
            app.switch_tab(app.active_tab.next());
            return Ok(());
        }
        KeyCode::Char('t') => {
            app.toggle_theme();
            return Ok(());
        }
        _ => {}
    }

    match app.active_tab {
        ActiveTab::Dashboard => {}
        ActiveTab::Expenses => handle_expenses_key(app, key),
        ActiveTab::AddExpense => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char('i')) {
                app.switch_tab(ActiveTab::AddExpense);
            }
        }
    }

    Ok(())
}

/// Handle keys on the expenses tab
fn handle_expenses_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),
        KeyCode::Char('/') => {
            app.filter_form.focus();
            app.input_mode = InputMode::Editing;
        }
        KeyCode::Char('c') => app.cycle_category(),
        KeyCode::Char('C') => app.clear_filters(),
        KeyCode::Char('x') => app.export_csv(),
        _ => {}
    }
}

/// Handle keys while a form has focus
fn handle_editing_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_tab {
        ActiveTab::AddExpense => {
            add_expense::handle_key(app, key);
        }
        ActiveTab::Expenses => {
            expenses::handle_filter_key(app, key);
        }
        ActiveTab::Dashboard => app.input_mode = InputMode::Normal,
    }
    Ok(())
}

/// Handle keys when a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Help => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Enter
            ) {
                app.close_dialog();
            }
        }
        ActiveDialog::ConfirmDelete(id) => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_delete(id),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
            _ => {}
        },
        ActiveDialog::None => {}
    }
    Ok(())
}
