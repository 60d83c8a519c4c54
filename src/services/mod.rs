//! Service layer for the expense tracker
//!
//! Pure logic on top of the models: filtering the store and validating form
//! input before it reaches the store.

pub mod filter;
pub mod validation;

pub use filter::{filter_expenses, DateRange, ExpenseFilter};
pub use validation::{parse_amount, parse_date, ExpenseDraft};
