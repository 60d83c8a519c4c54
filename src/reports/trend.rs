//! Expense trend series
//!
//! Date-ordered points for the dashboard chart. Each expense contributes its
//! own point; expenses on the same day are not merged.

use chrono::NaiveDateTime;

use crate::models::Expense;

/// Short chart label format, e.g. `Jan 2`
pub const LABEL_FORMAT: &str = "%b %-d";

/// A single point on the trend chart
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub label: String,
    pub date: NaiveDateTime,
    pub amount: f64,
}

/// Date-ordered series of expense amounts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrendSeries {
    pub points: Vec<TrendPoint>,
}

impl TrendSeries {
    /// Build the series from a borrowed collection, sorting a copy by date
    pub fn generate(expenses: &[Expense]) -> Self {
        let mut sorted: Vec<&Expense> = expenses.iter().collect();
        // Stable sort keeps input order for equal dates
        sorted.sort_by_key(|e| e.date);

        let points = sorted
            .into_iter()
            .map(|e| TrendPoint {
                label: e.date.format(LABEL_FORMAT).to_string(),
                date: e.date,
                amount: e.amount,
            })
            .collect();

        Self { points }
    }

    /// Smallest and largest amount, if there are any points
    pub fn bounds(&self) -> Option<(f64, f64)> {
        let mut amounts = self.points.iter().map(|p| p.amount);
        let first = amounts.next()?;
        Some(amounts.fold((first, first), |(lo, hi), a| (lo.min(a), hi.max(a))))
    }

    /// Check if the series has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }
}
