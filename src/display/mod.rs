//! Display formatting shared by the TUI and the CLI

pub mod expense;

pub use expense::{format_amount, format_long_date, truncate};
