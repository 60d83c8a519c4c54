//! Storage layer for the expense tracker
//!
//! Expenses are kept in memory for the lifetime of a session.

pub mod expenses;

pub use expenses::ExpenseStore;
