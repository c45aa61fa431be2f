use chrono::NaiveDate;
use layoffs_analytics::analyze;
use layoffs_ingest::read_records;
use layoffs_model::{AnalyticsOptions, Record};
use layoffs_report::{
    NULL_MARKER, OutputFile, RunManifest, sha256_file, write_analytics_json, write_clean_csv,
    write_manifest,
};
use layoffs_transform::CleaningReport;

fn clean_records() -> Vec<Record> {
    vec![
        Record::new("Nova", "SF")
            .with_industry("Crypto")
            .with_total(300)
            .with_percentage(1.0)
            .with_date(NaiveDate::from_ymd_opt(2023, 1, 10).unwrap())
            .with_stage("Seed")
            .with_country("United States")
            .with_funds(50),
        Record::new("Bolt", "Berlin").with_percentage(0.05),
        Record::new("Acme", "NYC").with_industry("Retail").with_total(12),
    ]
}

#[test]
fn clean_csv_round_trips_through_ingest() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("clean.csv");
    let records = clean_records();

    write_clean_csv(&path, &records).expect("write csv");
    let result = read_records(&path).expect("read back");

    assert!(result.issues.is_empty());
    assert_eq!(result.records, records);
}

#[test]
fn blank_text_and_null_stay_distinct_on_disk() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("clean.csv");
    let records = vec![
        Record::new("Zeta", "SF").with_industry("").with_total(10),
        Record::new("None", "NYC")
            .with_country("  ")
            .with_percentage(0.5),
    ];

    write_clean_csv(&path, &records).expect("write csv");
    let text = std::fs::read_to_string(&path).expect("read csv");
    assert!(text.contains(NULL_MARKER));
    let result = read_records(&path).expect("read back");

    assert!(result.issues.is_empty());
    assert_eq!(result.records, records);
}

#[test]
fn text_equal_to_a_null_token_is_not_written() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("clean.csv");
    let records = vec![Record::new("Acme", "NYC").with_stage("N/A").with_total(1)];

    let err = write_clean_csv(&path, &records).unwrap_err();
    assert!(format!("{err:#}").contains("stage value 'N/A'"));
    assert!(!path.exists());
}

#[test]
fn empty_dataset_writes_header_only() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("clean.csv");
    write_clean_csv(&path, &[]).expect("write csv");
    let result = read_records(&path).expect("read back");
    assert!(result.records.is_empty());
}

#[test]
fn analytics_json_and_manifest() {
    let dir = tempfile::tempdir().expect("temp dir");
    let analytics_path = dir.path().join("analytics.json");
    let report = analyze(&clean_records(), &AnalyticsOptions::default());
    write_analytics_json(&analytics_path, &report).expect("write json");

    let text = std::fs::read_to_string(&analytics_path).expect("read json");
    let value: serde_json::Value = serde_json::from_str(&text).expect("parse json");
    assert_eq!(value["shutdown_count"], 1);

    let manifest_path = dir.path().join("manifest.json");
    let manifest = RunManifest {
        input: "layoffs.csv".into(),
        input_sha256: "00".repeat(32),
        ingest_issues: 0,
        cleaning: CleaningReport::default(),
        outputs: vec![OutputFile::from_path(&analytics_path).expect("checksum")],
    };
    write_manifest(&manifest_path, &manifest).expect("write manifest");

    let round: RunManifest =
        serde_json::from_str(&std::fs::read_to_string(&manifest_path).expect("read manifest"))
            .expect("parse manifest");
    assert_eq!(round, manifest);
    assert_eq!(
        round.outputs[0].sha256,
        sha256_file(&analytics_path).expect("checksum")
    );
}
