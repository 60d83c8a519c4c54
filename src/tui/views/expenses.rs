//! Expenses view
//!
//! Filter bar above a table of the filtered expenses.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::{format_amount, format_long_date, truncate};
use crate::error::ExpenseResult;
use crate::services::{parse_date, DateRange};
use crate::tui::app::{App, InputMode};
use crate::tui::layout::ExpensesLayout;
use crate::tui::widgets::input::TextInput;

const LABEL_WIDTH: usize = 8;

/// Label for the category filter when no category is selected
pub const ALL_CATEGORIES: &str = "All Categories";

/// Which filter input has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterField {
    #[default]
    Search,
    From,
    To,
}

impl FilterField {
    pub fn next(self) -> Self {
        match self {
            Self::Search => Self::From,
            Self::From => Self::To,
            Self::To => Self::Search,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Search => Self::To,
            Self::From => Self::Search,
            Self::To => Self::From,
        }
    }
}

/// Text inputs of the filter bar
#[derive(Debug, Clone)]
pub struct FilterFormState {
    pub focused_field: FilterField,
    pub search_input: TextInput,
    pub from_input: TextInput,
    pub to_input: TextInput,
}

impl Default for FilterFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterFormState {
    pub fn new() -> Self {
        Self {
            focused_field: FilterField::Search,
            search_input: TextInput::new()
                .label("Search")
                .placeholder("Search expenses..."),
            from_input: TextInput::new().label("From").placeholder("YYYY-MM-DD"),
            to_input: TextInput::new().label("To").placeholder("YYYY-MM-DD"),
        }
    }

    /// Focus the search field
    pub fn focus(&mut self) {
        self.focused_field = FilterField::Search;
        self.update_focus();
    }

    pub fn blur(&mut self) {
        self.search_input.focused = false;
        self.from_input.focused = false;
        self.to_input.focused = false;
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.update_focus();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.search_input.focused = self.focused_field == FilterField::Search;
        self.from_input.focused = self.focused_field == FilterField::From;
        self.to_input.focused = self.focused_field == FilterField::To;
    }

    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            FilterField::Search => &mut self.search_input,
            FilterField::From => &mut self.from_input,
            FilterField::To => &mut self.to_input,
        }
    }

    /// Empty every input
    pub fn clear(&mut self) {
        self.search_input.clear();
        self.from_input.clear();
        self.to_input.clear();
    }

    /// Parse the date inputs; both blank means no range
    ///
    /// A single bound is kept but does not filter until the other is set.
    pub fn date_range(&self) -> ExpenseResult<Option<DateRange>> {
        let from = parse_optional_date(self.from_input.value())?;
        let to = parse_optional_date(self.to_input.value())?;

        if from.is_none() && to.is_none() {
            Ok(None)
        } else {
            Ok(Some(DateRange { from, to }))
        }
    }

    /// Show `range` in the date inputs
    pub fn set_date_range(&mut self, range: Option<DateRange>) {
        let range = range.unwrap_or_default();
        self.from_input.set_value(format_optional_date(range.from));
        self.to_input.set_value(format_optional_date(range.to));
    }
}

/// Midnight prints as a bare date so it round-trips through `parse_date`
fn format_optional_date(date: Option<chrono::NaiveDateTime>) -> String {
    match date {
        None => String::new(),
        Some(dt) if dt.time() == chrono::NaiveTime::MIN => dt.format("%Y-%m-%d").to_string(),
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
    }
}

fn parse_optional_date(s: &str) -> ExpenseResult<Option<chrono::NaiveDateTime>> {
    if s.trim().is_empty() {
        Ok(None)
    } else {
        parse_date(s).map(Some)
    }
}

/// Render the expenses view
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = ExpensesLayout::new(area);
    render_filters(frame, app, layout.filters);
    render_list(frame, app, layout.list);
}

fn render_filters(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let editing = app.input_mode == InputMode::Editing;
    let border = if editing { palette.accent } else { palette.border };

    let block = Block::default()
        .title(" Filters ")
        .title_style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let category = app
        .session
        .filter
        .category
        .clone()
        .unwrap_or_else(|| ALL_CATEGORIES.to_string());
    let category_line = Line::from(vec![
        Span::styled(
            format!("{:>width$}: ", "Category", width = LABEL_WIDTH),
            Style::default().fg(palette.accent),
        ),
        Span::styled(category, Style::default().fg(palette.foreground)),
        Span::styled("  (c to change)", Style::default().fg(palette.muted)),
    ]);

    let form = &app.filter_form;
    let rows = [
        form.search_input.to_line(&palette, LABEL_WIDTH),
        category_line,
        form.from_input.to_line(&palette, LABEL_WIDTH),
        form.to_input.to_line(&palette, LABEL_WIDTH),
    ];

    for (i, line) in rows.into_iter().enumerate() {
        let y = inner.y + i as u16;
        if y >= inner.y + inner.height {
            break;
        }
        frame.render_widget(Paragraph::new(line), Rect::new(inner.x, y, inner.width, 1));
    }
}

fn render_list(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let expenses = app.filtered();

    let block = Block::default()
        .title(format!(" Expenses ({}) ", expenses.len()))
        .title_style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));

    if expenses.is_empty() {
        let text = Paragraph::new("No expenses found")
            .style(Style::default().fg(palette.muted))
            .block(block);
        frame.render_widget(text, area);
        return;
    }

    let header = Row::new(vec!["Title", "Date", "Category", "Amount"])
        .style(Style::default().fg(palette.muted).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = expenses
        .iter()
        .map(|e| {
            Row::new(vec![
                Cell::from(truncate(&e.title, 30)),
                Cell::from(format_long_date(e.date)),
                Cell::from(e.category.clone()),
                Cell::from(Span::styled(
                    format_amount(e.amount, &app.settings.currency_symbol),
                    Style::default().fg(palette.amount),
                )),
            ])
            .style(Style::default().fg(palette.foreground))
        })
        .collect();

    let widths = [
        Constraint::Min(20),
        Constraint::Length(22),
        Constraint::Length(16),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(palette.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_index));
    frame.render_stateful_widget(table, area, &mut state);
}

/// Handle key input while the filter bar is being edited
/// Returns true if the key was handled, false otherwise
pub fn handle_filter_key(app: &mut App, key: KeyEvent) -> bool {
    let form = &mut app.filter_form;

    match key.code {
        KeyCode::Esc => {
            form.blur();
            app.input_mode = InputMode::Normal;
            app.revert_date_inputs();
        }
        KeyCode::Enter => {
            form.blur();
            app.input_mode = InputMode::Normal;
            app.apply_date_range();
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                form.prev_field();
            } else {
                form.next_field();
            }
        }
        KeyCode::BackTab => form.prev_field(),
        KeyCode::Left => form.focused_input().move_left(),
        KeyCode::Right => form.focused_input().move_right(),
        KeyCode::Home => form.focused_input().move_start(),
        KeyCode::End => form.focused_input().move_end(),
        KeyCode::Backspace | KeyCode::Delete | KeyCode::Char(_) => {
            let input = form.focused_input();
            match key.code {
                KeyCode::Backspace => input.backspace(),
                KeyCode::Delete => input.delete(),
                KeyCode::Char(c) => input.insert(c),
                _ => {}
            }
            // Search filters as you type; dates apply on Enter
            if form.focused_field == FilterField::Search {
                app.apply_search();
            }
        }
        _ => return false,
    }

    true
}
