//! Views over total shutdowns (`percentage_laid_off == 1`).

use serde::{Deserialize, Serialize};

use layoffs_model::Record;

/// One ranked shutdown: company, industry, and the ranking metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShutdownEntry {
    pub company: String,
    pub industry: Option<String>,
    pub value: i64,
}

/// Records whose percentage is exactly 1, in dataset order.
pub fn total_shutdowns(records: &[Record]) -> Vec<&Record> {
    records.iter().filter(|r| r.is_total_shutdown()).collect()
}

pub fn shutdown_count(records: &[Record]) -> usize {
    records.iter().filter(|r| r.is_total_shutdown()).count()
}

fn ranked_by(records: &[Record], metric: impl Fn(&Record) -> Option<i64>) -> Vec<ShutdownEntry> {
    let mut entries: Vec<ShutdownEntry> = total_shutdowns(records)
        .into_iter()
        .filter_map(|record| {
            metric(record).map(|value| ShutdownEntry {
                company: record.company.clone(),
                industry: record.industry.clone(),
                value,
            })
        })
        .collect();
    // sort_by is stable, so equal values keep dataset order.
    entries.sort_by(|a, b| b.value.cmp(&a.value));
    entries
}

/// Shutdowns with a known headcount, largest first.
pub fn shutdown_headcount_ranking(records: &[Record]) -> Vec<ShutdownEntry> {
    ranked_by(records, |r| r.total_laid_off)
}

/// Shutdowns with known funding, best funded first.
pub fn shutdown_funding_ranking(records: &[Record]) -> Vec<ShutdownEntry> {
    ranked_by(records, |r| r.funds_raised_millions)
}
