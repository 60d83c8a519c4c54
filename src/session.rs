//! Session state
//!
//! The whole mutable state of a session lives in [`SessionState`]. It only
//! changes through [`SessionState::apply`], which consumes the old state and
//! returns the new one. Derived views (filtered list, summary, trend, CSV)
//! are recomputed on demand from the current state.

use crate::error::ExpenseResult;
use crate::export::{expenses_to_csv, CsvQuoting};
use crate::models::{Expense, ExpenseId, NewExpense};
use crate::reports::{Summary, TrendSeries};
use crate::services::{filter_expenses, DateRange, ExpenseFilter};
use crate::storage::ExpenseStore;

/// A discrete user intent
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Add a validated expense
    Add(NewExpense),
    /// Delete an expense; unknown ids are ignored
    Remove(ExpenseId),
    /// Replace the search term
    SetSearch(String),
    /// Replace the category filter (None = all categories)
    SetCategory(Option<String>),
    /// Replace the date range
    SetDateRange(Option<DateRange>),
    /// Reset every filter criterion
    ClearFilters,
}

/// Store plus filter criteria
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub store: ExpenseStore,
    pub filter: ExpenseFilter,
}

impl SessionState {
    /// An empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action and return the resulting state
    pub fn apply(mut self, action: Action) -> Self {
        match action {
            Action::Add(record) => {
                self.store.add(record);
            }
            Action::Remove(id) => {
                self.store.remove(id);
            }
            Action::SetSearch(term) => {
                tracing::debug!(%term, "search changed");
                self.filter.search_term = term;
            }
            Action::SetCategory(category) => {
                tracing::debug!(?category, "category filter changed");
                self.filter.category = category;
            }
            Action::SetDateRange(range) => {
                tracing::debug!(?range, "date range changed");
                self.filter.date_range = range;
            }
            Action::ClearFilters => {
                self.filter = ExpenseFilter::default();
            }
        }
        self
    }

    /// Expenses matching the current filter, in insertion order
    pub fn filtered(&self) -> Vec<Expense> {
        filter_expenses(self.store.list(), &self.filter)
    }

    /// Summary of the filtered expenses
    pub fn summary(&self) -> Summary {
        Summary::generate(&self.filtered())
    }

    /// Trend series of the filtered expenses
    pub fn trend(&self) -> TrendSeries {
        TrendSeries::generate(&self.filtered())
    }

    /// CSV text of the filtered expenses
    pub fn to_csv(&self, quoting: CsvQuoting) -> ExpenseResult<String> {
        expenses_to_csv(&self.filtered(), quoting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn on(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn seeded() -> SessionState {
        SessionState::new()
            .apply(Action::Add(NewExpense::new("Coffee", 4.5, on(2), "Food")))
            .apply(Action::Add(NewExpense::new("Taxi", 18.0, on(3), "Travel")))
            .apply(Action::Add(NewExpense::new("Bagel", 3.5, on(1), "Food")))
    }

    #[test]
    fn test_add_and_remove_actions() {
        let state = seeded();
        assert_eq!(state.store.len(), 3);

        let taxi = state.store.list()[1].id;
        let state = state.apply(Action::Remove(taxi));
        assert_eq!(state.store.len(), 2);

        let state = state.apply(Action::Remove(taxi));
        assert_eq!(state.store.len(), 2);
    }

    #[test]
    fn test_derived_views_follow_the_filter() {
        let state = seeded().apply(Action::SetCategory(Some("food".into())));

        let filtered = state.filtered();
        assert_eq!(filtered.len(), 2);

        let summary = state.summary();
        assert_eq!(summary.total, 8.0);
        assert_eq!(summary.average, 4.0);

        let labels: Vec<_> = state.trend().points.into_iter().map(|p| p.label).collect();
        assert_eq!(labels, vec!["Jan 1", "Jan 2"]);

        assert_eq!(
            state.to_csv(CsvQuoting::Raw).unwrap(),
            "Title,Amount,Date,Category\nCoffee,4.5,2024-01-02,Food\nBagel,3.5,2024-01-01,Food"
        );
    }

    #[test]
    fn test_trend_does_not_reorder_store() {
        let state = seeded();
        let before: Vec<_> = state.store.list().iter().map(|e| e.id).collect();
        let _ = state.trend();
        let after: Vec<_> = state.store.list().iter().map(|e| e.id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_clear_filters() {
        let state = seeded()
            .apply(Action::SetSearch("co".into()))
            .apply(Action::SetDateRange(Some(DateRange::new(on(1), on(2)))));
        assert_eq!(state.filtered().len(), 1);

        let state = state.apply(Action::ClearFilters);
        assert!(state.filter.is_empty());
        assert_eq!(state.filtered().len(), 3);
    }
}
