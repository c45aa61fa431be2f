//! Staged cleaning pipeline.
//!
//! Each stage takes the output of the previous stage and returns a new
//! record set. Stage counts are collected into a [`CleaningReport`].

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{info, info_span};

use layoffs_model::{CleaningOptions, Record};

use crate::dedupe::dedupe_records;
use crate::filter::filter_unusable;
use crate::impute::impute_industries;
use crate::normalization::normalize_records;

/// Row counts observed while cleaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningReport {
    pub input_rows: usize,
    pub duplicates_removed: usize,
    pub records_normalized: usize,
    pub industries_imputed: usize,
    pub rows_filtered: usize,
    pub output_rows: usize,
}

/// The clean dataset and how it was derived.
#[derive(Debug, Clone)]
pub struct CleanOutput {
    pub records: Vec<Record>,
    pub report: CleaningReport,
}

/// Stage results that carry the surviving record set.
trait StageOutput {
    fn rows(&self) -> usize;
}

impl StageOutput for Vec<Record> {
    fn rows(&self) -> usize {
        self.len()
    }
}

impl StageOutput for (Vec<Record>, usize) {
    fn rows(&self) -> usize {
        self.0.len()
    }
}

fn run_stage<T: StageOutput>(
    name: &'static str,
    input_rows: usize,
    stage: impl FnOnce() -> T,
) -> T {
    let span = info_span!("stage", stage = name);
    let _guard = span.enter();
    let start = Instant::now();
    let output = stage();
    info!(
        input_rows,
        output_rows = output.rows(),
        duration_ms = start.elapsed().as_millis(),
        "{name} complete"
    );
    output
}

/// Run dedupe, normalize, impute, and filter in order.
pub fn clean(records: Vec<Record>, options: &CleaningOptions) -> CleanOutput {
    let mut report = CleaningReport {
        input_rows: records.len(),
        ..CleaningReport::default()
    };

    let input_rows = records.len();
    let records = run_stage("dedupe", input_rows, || {
        dedupe_records(records, options.null_keys)
    });
    report.duplicates_removed = input_rows - records.len();

    let (records, normalized) =
        run_stage("normalize", records.len(), || normalize_records(records));
    report.records_normalized = normalized;

    let (records, imputed) = run_stage("impute", records.len(), || {
        impute_industries(records, options)
    });
    report.industries_imputed = imputed;

    let before_filter = records.len();
    let records = run_stage("filter", before_filter, || filter_unusable(records));
    report.rows_filtered = before_filter - records.len();
    report.output_rows = records.len();

    info!(
        input_rows = report.input_rows,
        output_rows = report.output_rows,
        duplicates_removed = report.duplicates_removed,
        industries_imputed = report.industries_imputed,
        rows_filtered = report.rows_filtered,
        "cleaning complete"
    );
    CleanOutput { records, report }
}
