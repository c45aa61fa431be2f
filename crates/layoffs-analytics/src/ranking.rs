//! Per-year company ranking with dense ranks.

use std::collections::BTreeMap;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use layoffs_model::Record;

/// A company's yearly total and its dense rank within that year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRank {
    pub year: i32,
    pub company: String,
    pub total: i64,
    pub rank: usize,
}

/// Dense ranks for values already sorted by the ranking metric.
///
/// Equal neighbours share a rank and the rank only grows by one when the
/// value changes.
pub fn dense_rank<T: PartialEq>(sorted: &[T]) -> Vec<usize> {
    let mut ranks = Vec::with_capacity(sorted.len());
    let mut rank = 0usize;
    for (idx, value) in sorted.iter().enumerate() {
        if idx == 0 || sorted[idx - 1] != *value {
            rank += 1;
        }
        ranks.push(rank);
    }
    ranks
}

/// Top companies by yearly layoffs, keeping dense ranks up to `top_n`.
///
/// Rows are ordered by year ascending, then rank, then company name.
/// Company sums saturate at the `i64` bounds.
pub fn top_companies_per_year(records: &[Record], top_n: usize) -> Vec<YearRank> {
    let mut sums: BTreeMap<i32, BTreeMap<&str, i64>> = BTreeMap::new();
    for record in records {
        if let (Some(date), Some(total)) = (record.layoff_date, record.total_laid_off) {
            let sum = sums
                .entry(date.year())
                .or_default()
                .entry(record.company.as_str())
                .or_insert(0);
            *sum = sum.saturating_add(total);
        }
    }

    let mut ranked = Vec::new();
    for (year, companies) in sums {
        let mut members: Vec<(&str, i64)> = companies.into_iter().collect();
        members.sort_by(|a, b| b.1.cmp(&a.1));
        let totals: Vec<i64> = members.iter().map(|(_, total)| *total).collect();
        for ((company, total), rank) in members.into_iter().zip(dense_rank(&totals)) {
            if rank > top_n {
                break;
            }
            ranked.push(YearRank {
                year,
                company: company.to_string(),
                total,
                rank,
            });
        }
    }
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn in_year(company: &str, year: i32, total: i64) -> Record {
        Record::new(company, "X")
            .with_total(total)
            .with_date(NaiveDate::from_ymd_opt(year, 4, 1).unwrap())
    }

    #[test]
    fn dense_rank_has_no_gaps() {
        assert_eq!(dense_rank(&[9, 7, 7, 5, 5, 5, 1]), vec![1, 2, 2, 3, 3, 3, 4]);
        assert!(dense_rank::<i64>(&[]).is_empty());
    }

    #[test]
    fn ties_share_a_rank_and_extend_past_n_rows() {
        let records = vec![
            in_year("A", 2022, 100),
            in_year("B", 2022, 90),
            in_year("C", 2022, 90),
            in_year("D", 2022, 80),
            in_year("E", 2022, 70),
            in_year("F", 2022, 60),
            in_year("G", 2022, 50),
        ];
        let ranked = top_companies_per_year(&records, 5);
        let rows: Vec<(&str, usize)> = ranked
            .iter()
            .map(|r| (r.company.as_str(), r.rank))
            .collect();
        assert_eq!(
            rows,
            vec![("A", 1), ("B", 2), ("C", 2), ("D", 3), ("E", 4), ("F", 5)]
        );
    }

    #[test]
    fn sums_per_company_within_a_year() {
        let records = vec![
            in_year("Amazon", 2023, 8_000),
            in_year("Amazon", 2023, 2_000),
            in_year("Google", 2023, 12_000),
            in_year("Amazon", 2022, 10_150),
        ];
        let ranked = top_companies_per_year(&records, 5);
        assert_eq!(
            ranked,
            vec![
                YearRank { year: 2022, company: "Amazon".into(), total: 10_150, rank: 1 },
                YearRank { year: 2023, company: "Google".into(), total: 12_000, rank: 1 },
                YearRank { year: 2023, company: "Amazon".into(), total: 10_000, rank: 2 },
            ]
        );
    }

    #[test]
    fn undated_or_unknown_totals_excluded() {
        let records = vec![
            Record::new("A", "X").with_total(5),
            Record::new("B", "X").with_date(NaiveDate::from_ymd_opt(2022, 1, 1).unwrap()),
        ];
        assert!(top_companies_per_year(&records, 5).is_empty());
    }

    #[test]
    fn huge_company_sums_saturate() {
        let records = vec![
            in_year("A", 2022, i64::MAX),
            in_year("A", 2022, 1),
            in_year("B", 2022, 5),
        ];
        let ranked = top_companies_per_year(&records, 5);
        assert_eq!(ranked[0].company, "A");
        assert_eq!(ranked[0].total, i64::MAX);
        assert_eq!(ranked[1].rank, 2);
    }
}
