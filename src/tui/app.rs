//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Expense data and filter criteria live in a [`SessionState`] and only change
//! through [`App::dispatch`].

use std::path::PathBuf;
use std::time::Duration;

use chrono::Local;

use crate::config::settings::{Settings, Theme};
use crate::error::ExpenseResult;
use crate::export::write_export;
use crate::models::{Expense, ExpenseId};
use crate::session::{Action, SessionState};

use super::theme::Palette;
use super::views::add_expense::ExpenseFormState;
use super::views::expenses::FilterFormState;
use super::widgets::toast::ToastQueue;

/// Which tab is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTab {
    #[default]
    Dashboard,
    Expenses,
    AddExpense,
}

impl ActiveTab {
    /// All tabs in display order
    pub const ALL: [ActiveTab; 3] = [Self::Dashboard, Self::Expenses, Self::AddExpense];

    /// Tab title
    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Expenses => "Expenses",
            Self::AddExpense => "Add Expense",
        }
    }

    /// Position in the tab strip
    pub fn index(self) -> usize {
        match self {
            Self::Dashboard => 0,
            Self::Expenses => 1,
            Self::AddExpense => 2,
        }
    }

    /// The tab to the right, wrapping around
    pub fn next(self) -> Self {
        match self {
            Self::Dashboard => Self::Expenses,
            Self::Expenses => Self::AddExpense,
            Self::AddExpense => Self::Dashboard,
        }
    }
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    ConfirmDelete(ExpenseId),
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Expenses and filter criteria
    pub session: SessionState,

    /// Current theme
    pub theme: Theme,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active tab
    pub active_tab: ActiveTab,

    /// Current input mode
    pub input_mode: InputMode,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected row in the filtered expense list
    pub selected_index: usize,

    /// Add-expense form
    pub expense_form: ExpenseFormState,

    /// Filter bar inputs
    pub filter_form: FilterFormState,

    /// Toast messages
    pub toasts: ToastQueue,

    /// Where CSV exports are written
    pub export_dir: PathBuf,
}

impl<'a> App<'a> {
    /// Create a new App instance with an empty session
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            session: SessionState::new(),
            theme: settings.theme,
            should_quit: false,
            active_tab: ActiveTab::default(),
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            selected_index: 0,
            expense_form: ExpenseFormState::new(),
            filter_form: FilterFormState::new(),
            toasts: ToastQueue::new(Duration::from_secs(settings.notification_secs)),
            export_dir: settings.export_dir(),
        }
    }

    /// Override the starting theme
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Palette for the current theme
    pub fn palette(&self) -> Palette {
        Palette::for_theme(self.theme)
    }

    /// Flip between light and dark
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Apply an action to the session and keep the selection in range
    pub fn dispatch(&mut self, action: Action) {
        let state = std::mem::take(&mut self.session);
        self.session = state.apply(action);
        self.clamp_selection();
    }

    /// Switch to a tab
    pub fn switch_tab(&mut self, tab: ActiveTab) {
        self.active_tab = tab;
        self.input_mode = if tab == ActiveTab::AddExpense {
            self.expense_form.focus();
            InputMode::Editing
        } else {
            InputMode::Normal
        };
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is open
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Expenses matching the current filter
    pub fn filtered(&self) -> Vec<Expense> {
        self.session.filtered()
    }

    /// The highlighted expense in the list, if any
    pub fn selected_expense(&self) -> Option<Expense> {
        self.filtered().into_iter().nth(self.selected_index)
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        let len = self.filtered().len();
        if self.selected_index + 1 < len {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.filtered().len();
        self.selected_index = self.selected_index.min(len.saturating_sub(1));
    }

    /// Ask for confirmation before deleting the highlighted expense
    pub fn request_delete(&mut self) {
        if let Some(expense) = self.selected_expense() {
            self.open_dialog(ActiveDialog::ConfirmDelete(expense.id));
        }
    }

    /// Delete an expense after confirmation
    pub fn confirm_delete(&mut self, id: ExpenseId) {
        self.close_dialog();
        let existed = self.session.store.get(id).is_some();
        self.dispatch(Action::Remove(id));
        if existed {
            self.toasts.success("Expense deleted");
        }
    }

    /// Validate the add-expense form and add the record on success
    pub fn submit_expense_form(&mut self) {
        match self.expense_form.draft().validate() {
            Ok(record) => {
                self.dispatch(Action::Add(record));
                self.expense_form.reset();
                self.toasts.success("Expense added successfully");
            }
            Err(e) => self.toasts.error(e.to_string()),
        }
    }

    /// Move the category filter to the next known category
    ///
    /// Cycles through "All Categories" and then each category in the store.
    pub fn cycle_category(&mut self) {
        let categories = self.session.store.categories();
        let current = self
            .session
            .filter
            .category
            .as_ref()
            .and_then(|c| categories.iter().position(|known| known == c));

        let next = match current {
            None => categories.first().cloned(),
            Some(i) => categories.get(i + 1).cloned(),
        };

        self.dispatch(Action::SetCategory(next));
    }

    /// Apply the search term typed in the filter bar
    pub fn apply_search(&mut self) {
        let term = self.filter_form.search_input.value().to_string();
        self.dispatch(Action::SetSearch(term));
    }

    /// Apply the date range typed in the filter bar
    pub fn apply_date_range(&mut self) {
        match self.filter_form.date_range() {
            Ok(range) => self.dispatch(Action::SetDateRange(range)),
            Err(e) => {
                self.toasts.error(e.to_string());
                self.revert_date_inputs();
            }
        }
    }

    /// Put the active date range back into the filter bar
    pub fn revert_date_inputs(&mut self) {
        self.filter_form.set_date_range(self.session.filter.date_range);
    }

    /// Reset all filter criteria and the filter bar
    pub fn clear_filters(&mut self) {
        self.filter_form.clear();
        self.dispatch(Action::ClearFilters);
        self.toasts.info("Filters cleared");
    }

    /// Write the filtered expenses to a dated CSV file
    pub fn export_csv(&mut self) {
        match self.write_export() {
            Ok(path) => self
                .toasts
                .success(format!("Exported to {}", path.display())),
            Err(e) => {
                tracing::warn!(error = %e, "export failed");
                self.toasts.error(e.to_string());
            }
        }
    }

    fn write_export(&self) -> ExpenseResult<PathBuf> {
        write_export(
            &self.export_dir,
            &self.filtered(),
            self.settings.csv_quoting,
            Local::now().date_naive(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewExpense;
    use chrono::NaiveDate;

    fn record(title: &str, category: &str, day: u32) -> NewExpense {
        let date = NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        NewExpense::new(title, 10.0, date, category)
    }

    #[test]
    fn test_tab_cycle() {
        assert_eq!(ActiveTab::Dashboard.next(), ActiveTab::Expenses);
        assert_eq!(ActiveTab::AddExpense.next(), ActiveTab::Dashboard);
        for (i, tab) in ActiveTab::ALL.iter().enumerate() {
            assert_eq!(tab.index(), i);
        }
    }

    #[test]
    fn test_switch_to_add_tab_enters_editing() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        app.switch_tab(ActiveTab::AddExpense);
        assert_eq!(app.input_mode, InputMode::Editing);

        app.switch_tab(ActiveTab::Dashboard);
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_selection_clamped_after_remove() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.dispatch(Action::Add(record("A", "Food", 1)));
        app.dispatch(Action::Add(record("B", "Food", 2)));

        app.move_down();
        assert_eq!(app.selected_index, 1);
        app.move_down();
        assert_eq!(app.selected_index, 1);

        let id = app.selected_expense().unwrap().id;
        app.confirm_delete(id);
        assert_eq!(app.selected_index, 0);
        assert_eq!(app.session.store.len(), 1);
    }

    #[test]
    fn test_confirm_delete_of_missing_expense_is_silent() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.dispatch(Action::Add(record("A", "Food", 1)));

        app.confirm_delete(ExpenseId::new());
        assert_eq!(app.session.store.len(), 1);
        assert!(app.toasts.latest().is_none());

        let id = app.selected_expense().unwrap().id;
        app.confirm_delete(id);
        app.confirm_delete(id);
        assert!(app.session.store.is_empty());
        assert_eq!(app.toasts.len(), 1);
    }

    #[test]
    fn test_cycle_category() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.dispatch(Action::Add(record("Lunch", "Food", 1)));
        app.dispatch(Action::Add(record("Bus", "Transport", 2)));

        app.cycle_category();
        assert_eq!(app.session.filter.category.as_deref(), Some("Food"));
        app.cycle_category();
        assert_eq!(app.session.filter.category.as_deref(), Some("Transport"));
        app.cycle_category();
        assert_eq!(app.session.filter.category, None);
    }

    #[test]
    fn test_toggle_theme() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        assert_eq!(app.theme, Theme::Light);
        app.toggle_theme();
        assert_eq!(app.theme, Theme::Dark);
    }
}
