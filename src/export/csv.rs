//! CSV export
//!
//! Serializes expenses as `Title,Amount,Date,Category`. Rows are separated by
//! a single `\n` with no trailing newline. In [`CsvQuoting::Raw`] mode fields
//! are joined verbatim, so a comma inside a title shifts the columns;
//! [`CsvQuoting::Rfc4180`] quotes such fields instead.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Fixed header row
pub const CSV_HEADER: [&str; 4] = ["Title", "Amount", "Date", "Category"];

/// MIME type of the export file
pub const CSV_MIME_TYPE: &str = "text/csv";

/// How free-text fields are escaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CsvQuoting {
    /// Fields are joined with no quoting at all
    #[default]
    Raw,
    /// Fields containing a comma, quote or newline are quoted
    Rfc4180,
}

fn row(expense: &Expense) -> [String; 4] {
    let amount = if expense.amount == 0.0 { 0.0 } else { expense.amount };
    [
        expense.title.clone(),
        amount.to_string(),
        expense.date.format("%Y-%m-%d").to_string(),
        expense.category.clone(),
    ]
}

/// Render expenses as CSV text
pub fn expenses_to_csv(expenses: &[Expense], quoting: CsvQuoting) -> ExpenseResult<String> {
    match quoting {
        CsvQuoting::Raw => Ok(raw_csv(expenses)),
        CsvQuoting::Rfc4180 => quoted_csv(expenses),
    }
}

fn raw_csv(expenses: &[Expense]) -> String {
    std::iter::once(CSV_HEADER.join(","))
        .chain(expenses.iter().map(|e| row(e).join(",")))
        .collect::<Vec<_>>()
        .join("\n")
}

fn quoted_csv(expenses: &[Expense]) -> ExpenseResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for expense in expenses {
        writer.write_record(row(expense))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    let mut text = String::from_utf8(bytes).map_err(|e| ExpenseError::Export(e.to_string()))?;

    // The writer terminates every record; the export format has no trailing newline
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// Write expenses as CSV to any writer
pub fn write_expenses_csv<W: Write>(
    expenses: &[Expense],
    quoting: CsvQuoting,
    writer: &mut W,
) -> ExpenseResult<()> {
    let text = expenses_to_csv(expenses, quoting)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| ExpenseError::Export(e.to_string()))
}

/// Export file name for the given day, e.g. `expenses-2024-01-02.csv`
pub fn export_filename(date: NaiveDate) -> String {
    format!("expenses-{}.csv", date.format("%Y-%m-%d"))
}

/// Write an export file into `dir` and return its path
///
/// The file handle is closed before this returns.
pub fn write_export(
    dir: &Path,
    expenses: &[Expense],
    quoting: CsvQuoting,
    today: NaiveDate,
) -> ExpenseResult<PathBuf> {
    std::fs::create_dir_all(dir).map_err(|e| {
        ExpenseError::Export(format!("Failed to create {}: {}", dir.display(), e))
    })?;

    let path = dir.join(export_filename(today));
    let file = File::create(&path).map_err(|e| {
        ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;

    let mut writer = BufWriter::new(file);
    write_expenses_csv(expenses, quoting, &mut writer)?;
    writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    tracing::info!(path = %path.display(), rows = expenses.len(), mime = CSV_MIME_TYPE, "exported expenses");
    Ok(path)
}
