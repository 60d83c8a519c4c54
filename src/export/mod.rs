//! Export module for the expense tracker
//!
//! CSV is the only export format.

pub mod csv;

pub use self::csv::{
    export_filename, expenses_to_csv, write_expenses_csv, write_export, CsvQuoting, CSV_HEADER,
    CSV_MIME_TYPE,
};
