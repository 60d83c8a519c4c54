//! Expense Tracker - terminal-based personal expense tracking
//!
//! This library provides the core of the expense tracker: an in-memory
//! expense store, a filter engine, summary and trend aggregation, CSV export
//! and the interactive TUI built on top of them. Expenses live only for the
//! duration of a session; nothing but settings is written to disk.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Expense records and identifiers
//! - `storage`: The in-memory expense store
//! - `services`: Filtering and form validation
//! - `reports`: Summary statistics and the trend series
//! - `export`: CSV export
//! - `session`: Session state and the actions that change it
//! - `display`: Amount and date formatting
//! - `logging`: Tracing setup
//! - `tui`: Terminal user interface
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::session::{Action, SessionState};
//! use expense_tracker::services::ExpenseDraft;
//!
//! let record = ExpenseDraft::new("Coffee", "4.5", "2024-01-02", "Food").validate()?;
//! let state = SessionState::new().apply(Action::Add(record));
//! assert_eq!(state.summary().count, 1);
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod session;
pub mod storage;
pub mod tui;

pub use error::{ExpenseError, ExpenseResult};
