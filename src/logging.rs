//! Tracing setup
//!
//! The TUI owns the terminal, so log output goes to a file in the config
//! directory instead of stderr.

use std::fs::OpenOptions;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::paths::ExpensePaths;
use crate::error::ExpenseResult;

/// Environment variable holding the tracing filter
pub const LOG_ENV_VAR: &str = "EXPENSE_TRACKER_LOG";

const DEFAULT_FILTER: &str = "expense_tracker=info";

static TRACING_INIT: Once = Once::new();

/// Initialize the global tracing subscriber, appending to the log file
pub fn init_tracing(paths: &ExpensePaths) -> ExpenseResult<()> {
    paths.ensure_directories()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())?;

    TRACING_INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // Another subscriber may already be installed (e.g. by a test harness)
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .try_init();

        tracing::info!("Expense tracker v{} tracing initialized", env!("CARGO_PKG_VERSION"));
    });

    Ok(())
}
