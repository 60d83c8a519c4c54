//! Add Expense view
//!
//! Form with title, amount, date and category fields. Tab moves between
//! fields and Enter submits; the form resets after a successful add.

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::services::ExpenseDraft;
use crate::tui::app::{App, InputMode};
use crate::tui::widgets::input::{TextInput, TextInputWidget};

/// Format used to prefill the date field
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d %H:%M";

const LABEL_WIDTH: usize = 8;

/// Which field is currently focused in the expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Title,
    Amount,
    Date,
    Category,
}

impl ExpenseField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Title => Self::Amount,
            Self::Amount => Self::Date,
            Self::Date => Self::Category,
            Self::Category => Self::Title,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Title => Self::Category,
            Self::Amount => Self::Title,
            Self::Date => Self::Amount,
            Self::Category => Self::Date,
        }
    }
}

/// State for the add-expense form
#[derive(Debug, Clone)]
pub struct ExpenseFormState {
    /// Currently focused field
    pub focused_field: ExpenseField,
    pub title_input: TextInput,
    pub amount_input: TextInput,
    pub date_input: TextInput,
    pub category_input: TextInput,
}

impl Default for ExpenseFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseFormState {
    /// Create an empty form with the date set to now
    pub fn new() -> Self {
        let now = Local::now().naive_local();
        Self {
            focused_field: ExpenseField::Title,
            title_input: TextInput::new()
                .label("Title")
                .placeholder("e.g. Coffee"),
            amount_input: TextInput::new().label("Amount").placeholder("0.00"),
            date_input: TextInput::new()
                .label("Date")
                .placeholder("YYYY-MM-DD")
                .content(now.format(DATE_INPUT_FORMAT).to_string()),
            category_input: TextInput::new()
                .label("Category")
                .placeholder("e.g. Food"),
        }
    }

    /// Clear the form and focus the title again
    pub fn reset(&mut self) {
        *self = Self::new();
        self.focus();
    }

    /// Give keyboard focus to the current field
    pub fn focus(&mut self) {
        self.update_focus();
    }

    /// Drop keyboard focus from every field
    pub fn blur(&mut self) {
        self.title_input.focused = false;
        self.amount_input.focused = false;
        self.date_input.focused = false;
        self.category_input.focused = false;
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.update_focus();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.title_input.focused = self.focused_field == ExpenseField::Title;
        self.amount_input.focused = self.focused_field == ExpenseField::Amount;
        self.date_input.focused = self.focused_field == ExpenseField::Date;
        self.category_input.focused = self.focused_field == ExpenseField::Category;
    }

    /// Get the currently focused input
    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            ExpenseField::Title => &mut self.title_input,
            ExpenseField::Amount => &mut self.amount_input,
            ExpenseField::Date => &mut self.date_input,
            ExpenseField::Category => &mut self.category_input,
        }
    }

    /// Raw field values, ready for validation
    pub fn draft(&self) -> ExpenseDraft {
        ExpenseDraft::new(
            self.title_input.value(),
            self.amount_input.value(),
            self.date_input.value(),
            self.category_input.value(),
        )
    }
}

/// Render the add-expense form
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let form = &app.expense_form;

    let block = Block::default()
        .title(" Add New Expense ")
        .title_style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let inputs = [
        &form.title_input,
        &form.amount_input,
        &form.date_input,
        &form.category_input,
    ];
    for (input, row) in inputs.into_iter().zip(rows.iter()) {
        frame.render_widget(TextInputWidget::new(input, &palette, LABEL_WIDTH), *row);
    }

    let hint = if app.input_mode == InputMode::Editing {
        vec![
            Span::styled("[Tab]", Style::default().fg(palette.accent)),
            Span::raw(" Next field  "),
            Span::styled("[Enter]", Style::default().fg(palette.accent)),
            Span::raw(" Add Expense  "),
            Span::styled("[Esc]", Style::default().fg(palette.accent)),
            Span::raw(" Stop editing"),
        ]
    } else {
        vec![
            Span::styled("[Enter]", Style::default().fg(palette.accent)),
            Span::raw(" Edit form"),
        ]
    };
    frame.render_widget(
        Paragraph::new(Line::from(hint)).style(Style::default().fg(palette.muted)),
        rows[4],
    );
}

/// Handle key input while the form is being edited
/// Returns true if the key was handled, false otherwise
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let form = &mut app.expense_form;

    match key.code {
        KeyCode::Esc => {
            form.blur();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                form.prev_field();
            } else {
                form.next_field();
            }
        }
        KeyCode::BackTab => form.prev_field(),
        KeyCode::Enter => app.submit_expense_form(),
        KeyCode::Backspace => form.focused_input().backspace(),
        KeyCode::Delete => form.focused_input().delete(),
        KeyCode::Left => form.focused_input().move_left(),
        KeyCode::Right => form.focused_input().move_right(),
        KeyCode::Home => form.focused_input().move_start(),
        KeyCode::End => form.focused_input().move_end(),
        KeyCode::Char(c) => form.focused_input().insert(c),
        _ => return false,
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_navigation() {
        let mut form = ExpenseFormState::new();
        form.focus();
        assert!(form.title_input.focused);

        form.next_field();
        assert_eq!(form.focused_field, ExpenseField::Amount);
        assert!(form.amount_input.focused);
        assert!(!form.title_input.focused);

        form.prev_field();
        form.prev_field();
        assert_eq!(form.focused_field, ExpenseField::Category);
    }

    #[test]
    fn test_date_prefilled() {
        let form = ExpenseFormState::new();
        assert!(!form.date_input.value().is_empty());
        assert!(crate::services::parse_date(form.date_input.value()).is_ok());
    }

    #[test]
    fn test_reset_clears_fields() {
        let mut form = ExpenseFormState::new();
        form.title_input.set_value("Coffee");
        form.next_field();
        form.reset();

        assert_eq!(form.title_input.value(), "");
        assert_eq!(form.focused_field, ExpenseField::Title);
        assert!(form.title_input.focused);
    }

    #[test]
    fn test_draft_carries_raw_values() {
        let mut form = ExpenseFormState::new();
        form.title_input.set_value("Coffee");
        form.amount_input.set_value("4.5");
        form.date_input.set_value("2024-01-02");
        form.category_input.set_value("Food");

        let record = form.draft().validate().unwrap();
        assert_eq!(record.title, "Coffee");
        assert_eq!(record.amount, 4.5);
    }
}
