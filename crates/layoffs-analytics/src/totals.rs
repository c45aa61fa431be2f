//! Grouped sums and averages.
//!
//! A null group key forms its own group, the way SQL `GROUP BY` treats
//! nulls. Ties on the metric are broken by key ascending, null first.
//! Sums saturate at the `i64` bounds.

use std::collections::BTreeMap;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use layoffs_model::Record;

use crate::summary::mean;

/// Summed `total_laid_off` for one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupTotal {
    pub key: Option<String>,
    pub total: i64,
}

/// Mean `percentage_laid_off` for one group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupAverage {
    pub key: Option<String>,
    pub average: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearTotal {
    pub year: i32,
    pub total: i64,
}

fn totals_by<F>(records: &[Record], key: F) -> Vec<GroupTotal>
where
    F: Fn(&Record) -> Option<&str>,
{
    let mut sums: BTreeMap<Option<&str>, i64> = BTreeMap::new();
    for record in records {
        let Some(total) = record.total_laid_off else {
            continue;
        };
        let sum = sums.entry(key(record)).or_insert(0);
        *sum = sum.saturating_add(total);
    }
    let mut totals: Vec<GroupTotal> = sums
        .into_iter()
        .map(|(key, total)| GroupTotal {
            key: key.map(str::to_string),
            total,
        })
        .collect();
    totals.sort_by(|a, b| b.total.cmp(&a.total));
    totals
}

pub fn totals_by_company(records: &[Record]) -> Vec<GroupTotal> {
    totals_by(records, |r| Some(r.company.as_str()))
}

pub fn totals_by_industry(records: &[Record]) -> Vec<GroupTotal> {
    totals_by(records, |r| r.industry.as_deref())
}

pub fn totals_by_country(records: &[Record]) -> Vec<GroupTotal> {
    totals_by(records, |r| r.country.as_deref())
}

pub fn totals_by_stage(records: &[Record]) -> Vec<GroupTotal> {
    totals_by(records, |r| r.stage.as_deref())
}

/// Yearly sums, most recent year first. Undated records are excluded.
pub fn totals_by_year(records: &[Record]) -> Vec<YearTotal> {
    let mut sums: BTreeMap<i32, i64> = BTreeMap::new();
    for record in records {
        if let (Some(date), Some(total)) = (record.layoff_date, record.total_laid_off) {
            let sum = sums.entry(date.year()).or_insert(0);
            *sum = sum.saturating_add(total);
        }
    }
    sums.into_iter()
        .rev()
        .map(|(year, total)| YearTotal { year, total })
        .collect()
}

/// Per-industry mean percentage, highest first.
pub fn average_percentage_by_industry(records: &[Record]) -> Vec<GroupAverage> {
    let mut groups: BTreeMap<Option<&str>, Vec<f64>> = BTreeMap::new();
    for record in records {
        if let Some(pct) = record.percentage_laid_off {
            groups
                .entry(record.industry.as_deref())
                .or_default()
                .push(pct);
        }
    }
    let mut averages: Vec<GroupAverage> = groups
        .into_iter()
        .filter_map(|(key, values)| {
            mean(values.into_iter()).map(|average| GroupAverage {
                key: key.map(str::to_string),
                average,
            })
        })
        .collect();
    averages.sort_by(|a, b| b.average.total_cmp(&a.average));
    averages
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn total(key: Option<&str>, total: i64) -> GroupTotal {
        GroupTotal {
            key: key.map(str::to_string),
            total,
        }
    }

    #[test]
    fn company_totals_sum_and_sort() {
        let records = vec![
            Record::new("Amazon", "Seattle").with_total(10_000),
            Record::new("Meta", "SF").with_total(11_000),
            Record::new("Amazon", "Seattle").with_total(8_000),
            Record::new("Meta", "SF"),
        ];
        assert_eq!(
            totals_by_company(&records),
            vec![total(Some("Amazon"), 18_000), total(Some("Meta"), 11_000)]
        );
    }

    #[test]
    fn null_keys_group_together_and_ties_sort_by_key() {
        let records = vec![
            Record::new("A", "X").with_industry("Retail").with_total(5),
            Record::new("B", "X").with_total(3),
            Record::new("C", "X").with_total(2),
            Record::new("D", "X").with_industry("Food").with_total(5),
        ];
        assert_eq!(
            totals_by_industry(&records),
            vec![
                total(None, 5),
                total(Some("Food"), 5),
                total(Some("Retail"), 5),
            ]
        );
    }

    #[test]
    fn year_totals_most_recent_first() {
        let d = |y| NaiveDate::from_ymd_opt(y, 6, 1).unwrap();
        let records = vec![
            Record::new("A", "X").with_total(1).with_date(d(2021)),
            Record::new("B", "X").with_total(2).with_date(d(2023)),
            Record::new("C", "X").with_total(4).with_date(d(2021)),
            Record::new("D", "X").with_total(100),
        ];
        assert_eq!(
            totals_by_year(&records),
            vec![
                YearTotal { year: 2023, total: 2 },
                YearTotal { year: 2021, total: 5 },
            ]
        );
    }

    #[test]
    fn industry_average_ordering() {
        let records = vec![
            Record::new("A", "X").with_industry("Retail").with_percentage(0.2),
            Record::new("B", "X").with_industry("Retail").with_percentage(0.4),
            Record::new("C", "X").with_industry("Crypto").with_percentage(1.0),
            Record::new("D", "X").with_industry("Food"),
        ];
        let averages = average_percentage_by_industry(&records);
        assert_eq!(averages.len(), 2);
        assert_eq!(averages[0].key.as_deref(), Some("Crypto"));
        assert_eq!(averages[1].key.as_deref(), Some("Retail"));
        assert!((averages[1].average - 0.3).abs() < 1e-9);
    }

    #[test]
    fn empty_dataset_yields_empty_groups() {
        assert!(totals_by_company(&[]).is_empty());
        assert!(totals_by_country(&[]).is_empty());
        assert!(totals_by_stage(&[]).is_empty());
        assert!(totals_by_year(&[]).is_empty());
        assert!(average_percentage_by_industry(&[]).is_empty());
    }

    #[test]
    fn huge_totals_saturate() {
        let d = NaiveDate::from_ymd_opt(2022, 6, 1).unwrap();
        let records = vec![
            Record::new("A", "X").with_total(i64::MAX).with_date(d),
            Record::new("A", "X").with_total(i64::MAX).with_date(d),
        ];
        assert_eq!(totals_by_company(&records), vec![total(Some("A"), i64::MAX)]);
        assert_eq!(
            totals_by_year(&records),
            vec![YearTotal { year: 2022, total: i64::MAX }]
        );
    }
}
