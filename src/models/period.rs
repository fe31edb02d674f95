//! Time buckets for spending-over-time reports
//!
//! A `TimeBucket` is the granularity the user asks for; a `PeriodKey` is the
//! bucket a given date falls into ("2025-01-15", "2025-W03", "2025-01").

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

use super::expense::ExpenseDate;
use crate::error::TrackerError;

/// Granularity of a spending-over-time report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeBucket {
    Daily,
    /// ISO weeks, Monday to Sunday
    Weekly,
    Monthly,
}

impl TimeBucket {
    /// Get the bucket a date falls into
    ///
    /// Stored text that is not a date forms its own bucket in every mode.
    pub fn key_for(&self, date: &ExpenseDate) -> PeriodKey {
        match date {
            ExpenseDate::Day(day) => self.key_for_day(*day),
            ExpenseDate::Unparsed(text) => PeriodKey::Unparsed(text.clone()),
        }
    }

    fn key_for_day(&self, date: NaiveDate) -> PeriodKey {
        match self {
            Self::Daily => PeriodKey::Day(date),
            Self::Weekly => {
                let week = date.iso_week();
                PeriodKey::Week {
                    year: week.year(),
                    week: week.week(),
                }
            }
            Self::Monthly => PeriodKey::Month {
                year: date.year(),
                month: date.month(),
            },
        }
    }
}

impl FromStr for TimeBucket {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            _ => Err(TrackerError::UnrecognizedChoice(s.trim().to_string())),
        }
    }
}

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "daily"),
            Self::Weekly => write!(f, "weekly"),
            Self::Monthly => write!(f, "monthly"),
        }
    }
}

/// The bucket a date belongs to; orders chronologically within one granularity
///
/// `Unparsed` buckets sort after every dated bucket.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PeriodKey {
    Day(NaiveDate),
    Week { year: i32, week: u32 },
    Month { year: i32, month: u32 },
    Unparsed(String),
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Week { year, week } => write!(f, "{:04}-W{:02}", year, week),
            Self::Month { year, month } => write!(f, "{:04}-{:02}", year, month),
            Self::Unparsed(text) if text.trim().is_empty() => write!(f, "(no date)"),
            Self::Unparsed(text) => f.write_str(text),
        }
    }
}
