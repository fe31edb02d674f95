//! Spending Over Time
//!
//! Groups expenses into daily, ISO-weekly or monthly buckets and totals each
//! bucket.

use std::collections::BTreeMap;

use crate::models::{Expense, Money, PeriodKey, TimeBucket};

/// Total for one bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodTotal {
    pub period: PeriodKey,
    pub total: Money,
    pub count: usize,
}

/// Spending Over Time report
#[derive(Debug, Clone)]
pub struct SpendingOverTime {
    pub bucket: TimeBucket,
    /// Buckets in chronological order; only buckets with expenses appear
    pub periods: Vec<PeriodTotal>,
}

impl SpendingOverTime {
    /// Generate the report for `expenses`
    pub fn generate(expenses: &[Expense], bucket: TimeBucket) -> Self {
        let mut totals: BTreeMap<PeriodKey, (Money, usize)> = BTreeMap::new();

        for expense in expenses {
            let entry = totals
                .entry(bucket.key_for(&expense.date))
                .or_insert((Money::zero(), 0));
            entry.0 += expense.amount;
            entry.1 += 1;
        }

        let periods = totals
            .into_iter()
            .map(|(period, (total, count))| PeriodTotal {
                period,
                total,
                count,
            })
            .collect();

        Self { bucket, periods }
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Total for the bucket labelled `label` ("2024-01-02", "2024-W01", "2024-01")
    pub fn total_for(&self, label: &str) -> Option<Money> {
        self.periods
            .iter()
            .find(|p| p.period.to_string() == label)
            .map(|p| p.total)
    }

    /// Format the report for terminal display, one `period: amount` line per bucket
    pub fn format_terminal(&self, currency: &str) -> String {
        if self.is_empty() {
            return "No expenses recorded.\n".to_string();
        }

        self.periods
            .iter()
            .map(|p| format!("{}: {}\n", p.period, p.total.format_with_symbol(currency)))
            .collect()
    }
}
