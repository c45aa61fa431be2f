//! Run pipeline with explicit stages.
//!
//! 1. **Ingest**: read the raw CSV into records
//! 2. **Clean**: dedupe, normalize, impute, filter
//! 3. **Analyze**: compute the analytics views (optional)
//! 4. **Output**: write the clean CSV, analytics JSON, and manifest
//!
//! Each stage takes the output of the previous stage and returns typed results.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use layoffs_analytics::{AnalyticsReport, analyze};
use layoffs_ingest::{IngestIssue, IngestResult, read_records};
use layoffs_model::{AnalyticsOptions, CleaningOptions, Record};
use layoffs_report::{
    ANALYTICS_JSON_FILE, CLEAN_CSV_FILE, MANIFEST_FILE, OutputFile, RunManifest, sha256_file,
    write_analytics_json, write_clean_csv, write_manifest,
};
use layoffs_transform::{CleanOutput, CleaningReport, clean};

/// Inputs for one pipeline run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    /// Output directory (default: `<INPUT_DIR>/output`).
    pub output_dir: Option<PathBuf>,
    pub cleaning: CleaningOptions,
    /// Compute analytics when set.
    pub analytics: Option<AnalyticsOptions>,
    /// Skip writing any files.
    pub dry_run: bool,
}

impl RunConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: None,
            cleaning: CleaningOptions::default(),
            analytics: None,
            dry_run: false,
        }
    }

    pub fn resolved_output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| {
            self.input
                .parent()
                .map_or_else(|| PathBuf::from("output"), |dir| dir.join("output"))
        })
    }
}

/// Everything a run produced.
#[derive(Debug)]
pub struct RunResult {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub issues: Vec<IngestIssue>,
    pub cleaning: CleaningReport,
    pub records: Vec<Record>,
    pub analytics: Option<AnalyticsReport>,
    pub outputs: Vec<PathBuf>,
}

// ============================================================================
// Stage 1: Ingest
// ============================================================================

pub fn ingest(input: &Path) -> Result<IngestResult> {
    let span = info_span!("ingest", input = %input.display());
    let _guard = span.enter();
    let start = Instant::now();
    let result = read_records(input).with_context(|| format!("read {}", input.display()))?;
    info!(
        records = result.records.len(),
        issues = result.issues.len(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(result)
}

// ============================================================================
// Stage 2: Clean
// ============================================================================

pub fn clean_records(records: Vec<Record>, options: &CleaningOptions) -> CleanOutput {
    info_span!("clean").in_scope(|| clean(records, options))
}

// ============================================================================
// Stage 3: Analyze
// ============================================================================

pub fn analyze_records(records: &[Record], options: &AnalyticsOptions) -> AnalyticsReport {
    let start = Instant::now();
    let report = analyze(records, options);
    info!(
        records = records.len(),
        duration_ms = start.elapsed().as_millis(),
        "analyze complete"
    );
    report
}

// ============================================================================
// Stage 4: Output
// ============================================================================

struct OutputInput<'a> {
    config: &'a RunConfig,
    output_dir: &'a Path,
    records: &'a [Record],
    analytics: Option<&'a AnalyticsReport>,
    cleaning: &'a CleaningReport,
    issue_count: usize,
}

fn output(input: OutputInput<'_>) -> Result<Vec<PathBuf>> {
    let span = info_span!("output", output_dir = %input.output_dir.display());
    let _guard = span.enter();
    fs::create_dir_all(input.output_dir)
        .with_context(|| format!("create {}", input.output_dir.display()))?;

    let mut written = Vec::new();
    let clean_path = input.output_dir.join(CLEAN_CSV_FILE);
    write_clean_csv(&clean_path, input.records)?;
    written.push(clean_path);

    if let Some(report) = input.analytics {
        let analytics_path = input.output_dir.join(ANALYTICS_JSON_FILE);
        write_analytics_json(&analytics_path, report)?;
        written.push(analytics_path);
    }

    let outputs = written
        .iter()
        .map(|path| OutputFile::from_path(path))
        .collect::<Result<Vec<_>>>()?;
    let manifest = RunManifest {
        input: input.config.input.clone(),
        input_sha256: sha256_file(&input.config.input)?,
        ingest_issues: input.issue_count,
        cleaning: input.cleaning.clone(),
        outputs,
    };
    let manifest_path = input.output_dir.join(MANIFEST_FILE);
    write_manifest(&manifest_path, &manifest)?;
    written.push(manifest_path);
    Ok(written)
}

/// Run every stage for one input file.
pub fn run(config: &RunConfig) -> Result<RunResult> {
    let IngestResult { records, issues } = ingest(&config.input)?;

    let CleanOutput {
        records,
        report: cleaning,
    } = clean_records(records, &config.cleaning);

    let analytics = config
        .analytics
        .as_ref()
        .map(|options| analyze_records(&records, options));

    let output_dir = config.resolved_output_dir();
    let outputs = if config.dry_run {
        info!("dry run, skipping outputs");
        Vec::new()
    } else {
        output(OutputInput {
            config,
            output_dir: &output_dir,
            records: &records,
            analytics: analytics.as_ref(),
            cleaning: &cleaning,
            issue_count: issues.len(),
        })?
    };

    Ok(RunResult {
        input: config.input.clone(),
        output_dir,
        issues,
        cleaning,
        records,
        analytics,
        outputs,
    })
}
