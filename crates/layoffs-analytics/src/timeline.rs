//! Month-bucketed totals and the cumulative rolling total.

use std::collections::BTreeMap;
use std::fmt;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use layoffs_model::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    pub year: i32,
    pub month: u32,
    pub total: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollingTotal {
    pub year: i32,
    pub month: u32,
    pub monthly_total: i64,
    pub rolling_total: i64,
}

impl fmt::Display for MonthlyTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl fmt::Display for RollingTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Per-month sums in chronological order.
///
/// Buckets exist only for months with at least one dated record; a null
/// `total_laid_off` contributes 0 to its bucket. Sums saturate at the `i64`
/// bounds.
pub fn monthly_totals(records: &[Record]) -> Vec<MonthlyTotal> {
    let mut buckets: BTreeMap<(i32, u32), i64> = BTreeMap::new();
    for record in records {
        let Some(date) = record.layoff_date else {
            continue;
        };
        let bucket = buckets.entry((date.year(), date.month())).or_insert(0);
        *bucket = bucket.saturating_add(record.total_laid_off.unwrap_or(0));
    }
    buckets
        .into_iter()
        .map(|((year, month), total)| MonthlyTotal { year, month, total })
        .collect()
}

/// Running sum of [`monthly_totals`], including the current month.
pub fn rolling_totals(records: &[Record]) -> Vec<RollingTotal> {
    let mut running = 0i64;
    monthly_totals(records)
        .into_iter()
        .map(|bucket| {
            running = running.saturating_add(bucket.total);
            RollingTotal {
                year: bucket.year,
                month: bucket.month,
                monthly_total: bucket.total,
                rolling_total: running,
            }
        })
        .collect()
}
