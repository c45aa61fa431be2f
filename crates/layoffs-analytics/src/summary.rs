//! Scalar views: peaks, averages, and the date range.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use layoffs_model::Record;

/// Earliest and latest layoff dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub earliest: NaiveDate,
    pub latest: NaiveDate,
}

/// Largest single-event `total_laid_off`.
pub fn peak_single_layoff(records: &[Record]) -> Option<i64> {
    records.iter().filter_map(|r| r.total_laid_off).max()
}

/// Largest `percentage_laid_off`.
pub fn peak_percentage(records: &[Record]) -> Option<f64> {
    records
        .iter()
        .filter_map(|r| r.percentage_laid_off)
        .max_by(f64::total_cmp)
}

/// Mean `percentage_laid_off` over non-null values.
pub fn average_percentage(records: &[Record]) -> Option<f64> {
    mean(records.iter().filter_map(|r| r.percentage_laid_off))
}

pub(crate) fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// `None` when no record has a date.
pub fn date_range(records: &[Record]) -> Option<DateRange> {
    let mut dates = records.iter().filter_map(|r| r.layoff_date);
    let first = dates.next()?;
    let (earliest, latest) = dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
    Some(DateRange { earliest, latest })
}
