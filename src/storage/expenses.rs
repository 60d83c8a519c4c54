//! In-memory expense store
//!
//! Holds the session's expenses in insertion order. Nothing is written to
//! disk; the store lives and dies with the session.

use crate::models::{Expense, ExpenseId, NewExpense};

/// Ordered collection of the session's expenses
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
}

impl ExpenseStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a fresh id to `record`, append it, and return the stored expense
    pub fn add(&mut self, record: NewExpense) -> Expense {
        let mut expense = Expense::from_new(record);
        // Ids stay unique within the store
        while self.get(expense.id).is_some() {
            expense.id = ExpenseId::new();
        }

        tracing::info!(id = %expense.id, title = %expense.title, "expense added");
        self.expenses.push(expense.clone());
        expense
    }

    /// Remove the expense with `id`. Returns whether anything was removed;
    /// an unknown id is not an error.
    pub fn remove(&mut self, id: ExpenseId) -> bool {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id != id);
        let removed = self.expenses.len() != before;

        if removed {
            tracing::info!(%id, "expense removed");
        } else {
            tracing::debug!(%id, "remove ignored, no such expense");
        }
        removed
    }

    /// All expenses in insertion order
    pub fn list(&self) -> &[Expense] {
        &self.expenses
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Distinct category labels in order of first appearance
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for expense in &self.expenses {
            if !seen.contains(&expense.category) {
                seen.push(expense.category.clone());
            }
        }
        seen
    }

    /// Number of stored expenses
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use std::collections::HashSet;

    fn day(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn record(title: &str, category: &str) -> NewExpense {
        NewExpense::new(title, 10.0, day(1), category)
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut store = ExpenseStore::new();
        let a = store.add(record("A", "Food"));
        let b = store.add(record("B", "Travel"));

        let ids: Vec<_> = store.list().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![a.id, b.id]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(b.id).unwrap().title, "B");
    }

    #[test]
    fn test_add_then_remove_restores_previous_state() {
        let mut store = ExpenseStore::new();
        store.add(record("A", "Food"));
        store.add(record("B", "Food"));
        let before = store.clone();

        let added = store.add(record("C", "Food"));
        assert!(store.remove(added.id));

        assert_eq!(store, before);
    }

    #[test]
    fn test_remove_middle_preserves_order() {
        let mut store = ExpenseStore::new();
        let a = store.add(record("A", "Food"));
        let b = store.add(record("B", "Food"));
        let c = store.add(record("C", "Food"));

        store.remove(b.id);
        let ids: Vec<_> = store.list().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![a.id, c.id]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut store = ExpenseStore::new();
        store.add(record("A", "Food"));

        assert!(!store.remove(ExpenseId::new()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_removed_id_is_gone() {
        let mut store = ExpenseStore::new();
        let a = store.add(record("A", "Food"));
        store.remove(a.id);

        assert!(store.get(a.id).is_none());
        assert!(!store.remove(a.id));
        assert!(store.is_empty());
    }

    #[test]
    fn test_ids_are_unique_across_many_additions() {
        let mut store = ExpenseStore::new();
        for i in 0..1000 {
            store.add(record(&format!("Item {}", i), "Misc"));
        }

        let ids: HashSet<_> = store.list().iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_categories_are_distinct_in_first_appearance_order() {
        let mut store = ExpenseStore::new();
        store.add(record("A", "Food"));
        store.add(record("B", "Travel"));
        store.add(record("C", "Food"));
        store.add(record("D", "food"));

        assert_eq!(store.categories(), vec!["Food", "Travel", "food"]);
    }
}
