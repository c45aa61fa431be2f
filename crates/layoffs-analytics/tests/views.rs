//! End-to-end checks of the analytics report.

use chrono::NaiveDate;
use layoffs_analytics::{VIEWS, analyze, rolling_totals};
use layoffs_model::{AnalyticsOptions, Record};

fn on(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample() -> Vec<Record> {
    vec![
        Record::new("Nova", "SF")
            .with_industry("Crypto")
            .with_total(300)
            .with_percentage(1.0)
            .with_date(on(2023, 1, 10))
            .with_stage("Seed")
            .with_country("United States")
            .with_funds(50),
        Record::new("Amazon", "Seattle")
            .with_industry("Retail")
            .with_total(10_000)
            .with_percentage(0.03)
            .with_date(on(2023, 1, 4))
            .with_stage("Post-IPO")
            .with_country("United States")
            .with_funds(108),
        Record::new("Bolt", "Berlin")
            .with_industry("Transportation")
            .with_percentage(0.1)
            .with_date(on(2022, 11, 20))
            .with_country("Germany"),
        Record::new("Ghost", "Austin")
            .with_industry("Retail")
            .with_total(40)
            .with_country("United States"),
    ]
}

#[test]
fn report_covers_every_view() {
    let report = analyze(&sample(), &AnalyticsOptions::default());

    assert_eq!(report.record_count, 4);
    assert_eq!(report.peak_single_layoff, Some(10_000));
    assert_eq!(report.shutdown_count, 1);
    assert_eq!(report.total_shutdowns[0].company, "Nova");
    assert_eq!(report.shutdown_headcount[0].value, 300);
    assert_eq!(report.shutdown_funding[0].value, 50);
    assert_eq!(report.by_company[0].key.as_deref(), Some("Amazon"));
    assert_eq!(report.by_industry[0].total, 10_040);
    assert_eq!(report.by_country[0].key.as_deref(), Some("United States"));
    assert_eq!(report.by_country[0].total, 10_340);
    let range = report.date_range.expect("date range");
    assert_eq!((range.earliest, range.latest), (on(2022, 11, 20), on(2023, 1, 10)));
    assert_eq!(report.top_companies_per_year.len(), 2);
    assert_eq!(report.by_year[0].year, 2023);
    assert_eq!(report.by_stage[0].key.as_deref(), Some("Post-IPO"));
    assert_eq!(report.peak_percentage, Some(1.0));
    let average = report.average_percentage.expect("average");
    assert!((average - (1.0 + 0.03 + 0.1) / 3.0).abs() < 1e-9);
    assert_eq!(
        report.average_percentage_by_industry[0].key.as_deref(),
        Some("Crypto")
    );
}

#[test]
fn rolling_totals_snapshot() {
    insta::assert_debug_snapshot!(rolling_totals(&sample()), @r"
    [
        RollingTotal {
            year: 2022,
            month: 11,
            monthly_total: 0,
            rolling_total: 0,
        },
        RollingTotal {
            year: 2023,
            month: 1,
            monthly_total: 10300,
            rolling_total: 10300,
        },
    ]
    ");
}

#[test]
fn empty_dataset_degrades_gracefully() {
    let report = analyze(&[], &AnalyticsOptions::default());
    assert_eq!(report.record_count, 0);
    assert_eq!(report.peak_single_layoff, None);
    assert_eq!(report.shutdown_count, 0);
    assert!(report.by_company.is_empty());
    assert_eq!(report.date_range, None);
    assert!(report.rolling_monthly.is_empty());
    assert!(report.top_companies_per_year.is_empty());
    assert_eq!(report.average_percentage, None);
}

#[test]
fn report_serializes_to_json() {
    let report = analyze(&sample(), &AnalyticsOptions { top_n: 1 });
    let json = serde_json::to_value(&report).expect("serialize report");
    assert_eq!(json["shutdown_count"], 1);
    assert_eq!(json["date_range"]["earliest"], "2022-11-20");
    assert_eq!(json["top_companies_per_year"][0]["company"], "Amazon");
    for view in VIEWS {
        assert!(
            json.get(view.name).is_some(),
            "view {} missing from report",
            view.name
        );
    }
}
