//! Expense model
//!
//! An expense is a dated monetary record with a title and a free-text
//! category. Amounts are plain `f64` values with no enforced sign, so refunds
//! can be entered as negative amounts.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;

/// An expense that has not entered the store yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
    pub title: String,
    pub amount: f64,
    pub date: NaiveDateTime,
    pub category: String,
}

impl NewExpense {
    /// Create a new expense record
    pub fn new(
        title: impl Into<String>,
        amount: f64,
        date: NaiveDateTime,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            amount,
            date,
            category: category.into(),
        }
    }
}

/// A stored expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned by the store
    pub id: ExpenseId,

    /// Display title
    pub title: String,

    /// Amount in the user's currency
    pub amount: f64,

    /// When the expense happened
    pub date: NaiveDateTime,

    /// Free-text category label
    pub category: String,
}

impl Expense {
    /// Attach a freshly generated id to a new expense record
    pub fn from_new(record: NewExpense) -> Self {
        Self {
            id: ExpenseId::new(),
            title: record.title,
            amount: record.amount,
            date: record.date,
            category: record.category,
        }
    }

    /// Case-insensitive substring match against the title
    pub fn title_contains(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty() || self.title.to_lowercase().contains(needle_lower)
    }

    /// Case-insensitive equality against the category
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.title,
            self.amount,
            self.category
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn jan(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_from_new_assigns_id() {
        let record = NewExpense::new("Coffee", 4.5, jan(2), "Food");
        let a = Expense::from_new(record.clone());
        let b = Expense::from_new(record);

        assert_eq!(a.title, "Coffee");
        assert_eq!(a.amount, 4.5);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_title_and_category_matching() {
        let expense = Expense::from_new(NewExpense::new("Morning Coffee", 4.5, jan(2), "Food"));

        assert!(expense.title_contains("coffee"));
        assert!(expense.title_contains(""));
        assert!(!expense.title_contains("food"));
        assert!(expense.in_category("FOOD"));
        assert!(!expense.in_category("Foo"));
    }

    #[test]
    fn test_display() {
        let expense = Expense::from_new(NewExpense::new("Coffee", 4.5, jan(2), "Food"));
        assert_eq!(expense.to_string(), "2024-01-02 Coffee 4.5 (Food)");
    }

    #[test]
    fn test_serialization() {
        let expense = Expense::from_new(NewExpense::new("Rent", -1200.0, jan(1), "Housing"));
        let json = serde_json::to_string(&expense).unwrap();
        let deserialized: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(expense, deserialized);
    }
}
