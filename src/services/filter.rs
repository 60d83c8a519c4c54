//! Filter engine
//!
//! Derives the visible list of expenses from the search term, the category
//! filter and the date range. All criteria are combined with AND and the
//! input order is preserved.

use chrono::NaiveDateTime;

use crate::models::Expense;

/// A possibly half-open date range picked in the UI
///
/// The range only filters when both bounds are set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDateTime>,
    pub to: Option<NaiveDateTime>,
}

impl DateRange {
    /// A range with both bounds set
    pub fn new(from: NaiveDateTime, to: NaiveDateTime) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    /// Both bounds, if the range is complete
    pub fn bounds(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        match (self.from, self.to) {
            (Some(from), Some(to)) => Some((from, to)),
            _ => None,
        }
    }

    /// Inclusive containment; an incomplete range contains everything
    pub fn contains(&self, date: NaiveDateTime) -> bool {
        match self.bounds() {
            Some((from, to)) => from <= date && date <= to,
            None => true,
        }
    }
}

/// Criteria driving the filter engine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    /// Free-text search against titles
    pub search_term: String,
    /// Category equality filter
    pub category: Option<String>,
    /// Inclusive date range
    pub date_range: Option<DateRange>,
}

impl ExpenseFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by search term
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Filter by category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filter by date range
    pub fn date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    /// Filter to an inclusive range with both bounds
    pub fn between(self, from: NaiveDateTime, to: NaiveDateTime) -> Self {
        self.date_range(DateRange::new(from, to))
    }

    /// Whether no criterion is active
    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty()
            && self.category.as_deref().map_or(true, str::is_empty)
            && self.date_range.and_then(|r| r.bounds()).is_none()
    }

    /// Check a single expense against every criterion
    pub fn matches(&self, expense: &Expense) -> bool {
        self.matches_lowered(expense, &self.search_term.to_lowercase())
    }

    /// `matches` with the search term already lowercased
    fn matches_lowered(&self, expense: &Expense, term_lower: &str) -> bool {
        expense.title_contains(term_lower)
            && self.matches_category(expense)
            && self.matches_date(expense)
    }

    fn matches_category(&self, expense: &Expense) -> bool {
        match self.category.as_deref() {
            None | Some("") => true,
            Some(category) => expense.in_category(category),
        }
    }

    fn matches_date(&self, expense: &Expense) -> bool {
        self.date_range.map_or(true, |range| range.contains(expense.date))
    }
}

/// Apply `criteria` to `all`, keeping the relative order of the input
pub fn filter_expenses(all: &[Expense], criteria: &ExpenseFilter) -> Vec<Expense> {
    let term_lower = criteria.search_term.to_lowercase();
    all.iter()
        .filter(|e| criteria.matches_lowered(e, &term_lower))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewExpense;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn sample() -> Vec<Expense> {
        vec![
            Expense::from_new(NewExpense::new("Coffee", 4.5, at(2, 9), "Food")),
            Expense::from_new(NewExpense::new("Train ticket", 23.0, at(5, 8), "Travel")),
            Expense::from_new(NewExpense::new("Coffee beans", 12.0, at(7, 18), "Groceries")),
            Expense::from_new(NewExpense::new("Lunch", 15.25, at(10, 12), "food")),
        ]
    }

    fn titles(expenses: &[Expense]) -> Vec<&str> {
        expenses.iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_returns_input_unchanged() {
        let all = sample();
        let filter = ExpenseFilter::new();

        assert!(filter.is_empty());
        assert_eq!(filter_expenses(&all, &filter), all);
    }

    #[test]
    fn test_search_is_case_insensitive_on_title_only() {
        let all = sample();

        let result = filter_expenses(&all, &ExpenseFilter::new().search("COFFEE"));
        assert_eq!(titles(&result), vec!["Coffee", "Coffee beans"]);

        // Category text is not searched
        let result = filter_expenses(&all, &ExpenseFilter::new().search("travel"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_category_is_case_insensitive_exact_match() {
        let all = sample();

        let result = filter_expenses(&all, &ExpenseFilter::new().category("FOOD"));
        assert_eq!(titles(&result), vec!["Coffee", "Lunch"]);

        let result = filter_expenses(&all, &ExpenseFilter::new().category("Foo"));
        assert!(result.is_empty());

        let result = filter_expenses(&all, &ExpenseFilter::new().category(""));
        assert_eq!(result.len(), all.len());
    }

    #[test]
    fn test_date_range_is_inclusive_at_full_precision() {
        let all = sample();

        let result = filter_expenses(&all, &ExpenseFilter::new().between(at(2, 9), at(7, 18)));
        assert_eq!(titles(&result), vec!["Coffee", "Train ticket", "Coffee beans"]);

        // A bound at midnight excludes a same-day expense later that day
        let result = filter_expenses(&all, &ExpenseFilter::new().between(at(1, 0), at(7, 0)));
        assert_eq!(titles(&result), vec!["Coffee", "Train ticket"]);
    }

    #[test]
    fn test_incomplete_date_range_matches_everything() {
        let all = sample();
        let half_open = DateRange {
            from: Some(at(6, 0)),
            to: None,
        };

        let filter = ExpenseFilter::new().date_range(half_open);
        assert!(filter.is_empty());
        assert_eq!(filter_expenses(&all, &filter).len(), all.len());
    }

    #[test]
    fn test_criteria_are_combined() {
        let all = sample();
        let filter = ExpenseFilter::new()
            .search("c")
            .category("food")
            .between(at(1, 0), at(31, 0));

        assert_eq!(titles(&filter_expenses(&all, &filter)), vec!["Coffee", "Lunch"]);
        assert!(filter.matches(&all[0]));
        assert!(!filter.matches(&all[1]));
    }

    #[test]
    fn test_filter_expenses_agrees_with_matches() {
        let all = sample();
        let filters = [
            ExpenseFilter::new(),
            ExpenseFilter::new().search("LUN"),
            ExpenseFilter::new().category("FOOD").search("o"),
            ExpenseFilter::new().between(at(2, 0), at(5, 23)),
        ];

        for filter in &filters {
            let expected: Vec<Expense> =
                all.iter().filter(|e| filter.matches(e)).cloned().collect();
            assert_eq!(filter_expenses(&all, filter), expected);
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let all = sample();
        let filter = ExpenseFilter::new().search("e").between(at(1, 0), at(8, 0));

        let once = filter_expenses(&all, &filter);
        let twice = filter_expenses(&once, &filter);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_does_not_mutate_input() {
        let all = sample();
        let snapshot = all.clone();
        let _ = filter_expenses(&all, &ExpenseFilter::new().search("coffee"));
        assert_eq!(all, snapshot);
    }
}
