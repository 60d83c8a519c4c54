//! Core data models for the expense tracker

pub mod expense;
pub mod ids;

pub use expense::{Expense, NewExpense};
pub use ids::ExpenseId;
