//! Dashboard summary
//!
//! Total, count and mean over a collection of expenses.

use crate::models::Expense;

/// Totals shown on the dashboard cards
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Sum of all amounts
    pub total: f64,
    /// Number of expenses
    pub count: usize,
    /// Mean amount, zero when there are no expenses
    pub average: f64,
}

impl Summary {
    /// Summarize a collection of expenses
    pub fn generate(expenses: &[Expense]) -> Self {
        let total: f64 = expenses.iter().map(|e| e.amount).sum();
        let count = expenses.len();
        let average = if count > 0 { total / count as f64 } else { 0.0 };

        Self {
            total,
            count,
            average,
        }
    }
}

impl Default for Summary {
    fn default() -> Self {
        Self::generate(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewExpense;
    use chrono::NaiveDate;

    fn expense(amount: f64) -> Expense {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        Expense::from_new(NewExpense::new("Item", amount, date, "Misc"))
    }

    #[test]
    fn test_empty_summary_is_all_zero() {
        let summary = Summary::generate(&[]);
        assert_eq!(summary.total, 0.0);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.average, 0.0);
        assert_eq!(summary, Summary::default());
    }

    #[test]
    fn test_summary_totals() {
        let expenses = vec![expense(10.0), expense(20.0), expense(-6.0)];
        let summary = Summary::generate(&expenses);

        assert_eq!(summary.total, 24.0);
        assert_eq!(summary.count, 3);
        assert_eq!(summary.average, 8.0);
    }

    #[test]
    fn test_average_is_total_over_count() {
        let expenses = vec![expense(4.5), expense(0.1), expense(0.2), expense(99.99)];
        let summary = Summary::generate(&expenses);
        assert_eq!(summary.average, summary.total / summary.count as f64);
    }
}
