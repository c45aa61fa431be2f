use std::fs;

use chrono::NaiveDate;
use layoffs_ingest::{IngestError, IssueKind, read_records, read_records_from_reader};

const RAW: &str = "\
company,location,industry,total_laid_off,percentage_laid_off,date,stage,country,funds_raised_millions
Atlassian,Sydney,Other,500,0.05,3/6/2023,Post-IPO,Australia,210
 SiriusXM ,New York City,Media,475,0.08,3/6/2023,Post-IPO,United States.,525
Nova,SF,Crypto Currency,300,1,2023-01-10,Seed,United States,50
Zeta,SF,NULL,NULL,NULL,someday,Unknown,United States,NULL
Odd,Austin,Retail,12.0,1.5,1/2/2022,Series A,United States,lots
";

#[test]
fn reads_raw_layoffs_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("layoffs.csv");
    fs::write(&path, RAW).expect("write csv");

    let result = read_records(&path).expect("read csv");
    assert_eq!(result.records.len(), 5);

    let atlassian = &result.records[0];
    assert_eq!(atlassian.total_laid_off, Some(500));
    assert_eq!(atlassian.percentage_laid_off, Some(0.05));
    assert_eq!(
        atlassian.layoff_date,
        NaiveDate::from_ymd_opt(2023, 3, 6)
    );
    assert_eq!(atlassian.funds_raised_millions, Some(210));

    // Whitespace survives ingestion; trimming is the Normalizer's job.
    assert_eq!(result.records[1].company, " SiriusXM ");
    assert_eq!(result.records[1].country.as_deref(), Some("United States."));

    let zeta = &result.records[3];
    assert_eq!(zeta.industry, None);
    assert_eq!(zeta.total_laid_off, None);
    assert_eq!(zeta.percentage_laid_off, None);
    assert_eq!(zeta.layoff_date, None);

    let odd = &result.records[4];
    assert_eq!(odd.total_laid_off, Some(12));
    // Out-of-range percentages are surfaced, not clamped.
    assert_eq!(odd.percentage_laid_off, Some(1.5));
    assert_eq!(odd.funds_raised_millions, None);

    let kinds: Vec<(usize, IssueKind)> = result
        .issues
        .iter()
        .map(|issue| (issue.row, issue.kind))
        .collect();
    assert_eq!(
        kinds,
        vec![
            (4, IssueKind::MalformedDate),
            (5, IssueKind::PercentageOutOfRange),
            (5, IssueKind::MalformedInteger),
        ]
    );
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = read_records(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn empty_input_is_an_error() {
    let err = read_records_from_reader("".as_bytes()).unwrap_err();
    assert!(matches!(err, IngestError::EmptyCsv));
}

#[test]
fn header_only_input_yields_no_records() {
    let result = read_records_from_reader("company,location\n".as_bytes()).expect("read");
    assert!(result.records.is_empty());
}

#[test]
fn columns_are_matched_by_name_not_position() {
    let csv = "Location,Total_Laid_Off,Company\nNYC,40,Acme\n";
    let result = read_records_from_reader(csv.as_bytes()).expect("read");
    assert_eq!(result.records[0].company, "Acme");
    assert_eq!(result.records[0].location, "NYC");
    assert_eq!(result.records[0].total_laid_off, Some(40));
}
