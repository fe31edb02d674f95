//! Reports module for the expense tracker
//!
//! Read-only aggregations over the expense list: totals by category,
//! the overall total and spending over time.

pub mod over_time;
pub mod summary;

pub use over_time::{PeriodTotal, SpendingOverTime};
pub use summary::{category_total, overall_total, totals_by_category, CategoryTotal};
