//! Reports for the dashboard
//!
//! - Summary: total, count and average
//! - Trend: date-ordered amounts for the chart

pub mod summary;
pub mod trend;

pub use summary::Summary;
pub use trend::{TrendPoint, TrendSeries};
