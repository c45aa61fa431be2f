//! CSV reading into layoff records.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, warn};

use layoffs_model::{Record, is_blank};

use crate::error::{IngestError, Result};
use crate::issues::{IngestIssue, IssueKind};
use crate::values::{parse_date, parse_decimal, parse_integer, parse_text};

/// Records loaded from a source plus the warnings raised while reading them.
#[derive(Debug, Clone, Default)]
pub struct IngestResult {
    pub records: Vec<Record>,
    pub issues: Vec<IngestIssue>,
}

/// Column positions resolved from the header row.
#[derive(Debug, Default)]
struct ColumnMap {
    company: usize,
    location: usize,
    industry: Option<usize>,
    total_laid_off: Option<usize>,
    percentage_laid_off: Option<usize>,
    date: Option<usize>,
    stage: Option<usize>,
    country: Option<usize>,
    funds_raised_millions: Option<usize>,
}

fn normalize_header(raw: &str) -> String {
    raw.trim()
        .trim_matches('\u{feff}')
        .trim()
        .to_ascii_lowercase()
        .replace(' ', "_")
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let names: Vec<String> = headers.iter().map(normalize_header).collect();
        let find = |candidates: &[&str]| {
            names
                .iter()
                .position(|name| candidates.contains(&name.as_str()))
        };
        Ok(Self {
            company: find(&["company"]).ok_or(IngestError::MissingColumn { column: "company" })?,
            location: find(&["location"]).ok_or(IngestError::MissingColumn {
                column: "location",
            })?,
            industry: find(&["industry"]),
            total_laid_off: find(&["total_laid_off"]),
            percentage_laid_off: find(&["percentage_laid_off"]),
            date: find(&["date", "layoff_date"]),
            stage: find(&["stage"]),
            country: find(&["country"]),
            funds_raised_millions: find(&["funds_raised_millions"]),
        })
    }
}

/// Per-row parsing state that collects warnings.
struct RowReader<'a> {
    row: usize,
    record: &'a StringRecord,
    issues: &'a mut Vec<IngestIssue>,
}

impl RowReader<'_> {
    fn cell(&self, index: Option<usize>) -> &str {
        index.and_then(|idx| self.record.get(idx)).unwrap_or("")
    }

    /// Any non-blank text, null tokens included, is a valid identifier.
    fn required(&self, index: usize, column: &'static str) -> Result<String> {
        let value = self.cell(Some(index));
        if is_blank(value) {
            return Err(IngestError::RequiredValue {
                row: self.row,
                column,
            });
        }
        Ok(value.to_string())
    }

    /// An absent column or a short row is null; an empty cell is blank text.
    fn text(&self, index: Option<usize>) -> Option<String> {
        index
            .and_then(|idx| self.record.get(idx))
            .and_then(parse_text)
    }

    fn warn(&mut self, column: &'static str, kind: IssueKind, value: &str) {
        self.issues.push(IngestIssue {
            row: self.row,
            column,
            kind,
            value: value.trim().to_string(),
        });
    }

    fn integer(&mut self, index: Option<usize>, column: &'static str) -> Option<i64> {
        let raw = self.cell(index).to_string();
        parse_integer(&raw).unwrap_or_else(|_| {
            self.warn(column, IssueKind::MalformedInteger, &raw);
            None
        })
    }

    fn percentage(&mut self, index: Option<usize>) -> Option<f64> {
        let column = "percentage_laid_off";
        let raw = self.cell(index).to_string();
        match parse_decimal(&raw) {
            Ok(Some(value)) => {
                if !(0.0..=1.0).contains(&value) {
                    self.warn(column, IssueKind::PercentageOutOfRange, &raw);
                }
                Some(value)
            }
            Ok(None) => None,
            Err(_) => {
                self.warn(column, IssueKind::MalformedDecimal, &raw);
                None
            }
        }
    }

    fn date(&mut self, index: Option<usize>) -> Option<chrono::NaiveDate> {
        let raw = self.cell(index).to_string();
        parse_date(&raw).unwrap_or_else(|_| {
            self.warn("date", IssueKind::MalformedDate, &raw);
            None
        })
    }
}

fn read_row(
    columns: &ColumnMap,
    row: usize,
    record: &StringRecord,
    issues: &mut Vec<IngestIssue>,
) -> Result<Record> {
    let mut reader = RowReader {
        row,
        record,
        issues,
    };
    Ok(Record {
        company: reader.required(columns.company, "company")?,
        location: reader.required(columns.location, "location")?,
        industry: reader.text(columns.industry),
        total_laid_off: reader.integer(columns.total_laid_off, "total_laid_off"),
        percentage_laid_off: reader.percentage(columns.percentage_laid_off),
        layoff_date: reader.date(columns.date),
        stage: reader.text(columns.stage),
        country: reader.text(columns.country),
        funds_raised_millions: reader.integer(columns.funds_raised_millions, "funds_raised_millions"),
    })
}

/// Read layoff records from any CSV source with a header row.
pub fn read_records_from_reader<R: Read>(source: R) -> Result<IngestResult> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);
    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(IngestError::EmptyCsv);
    }
    let columns = ColumnMap::from_headers(&headers)?;
    debug!(?columns, "resolved csv columns");

    let mut result = IngestResult::default();
    for (idx, row) in reader.records().enumerate() {
        let row = row?;
        if row.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let record = read_row(&columns, idx + 1, &row, &mut result.issues)?;
        result.records.push(record);
    }

    for issue in &result.issues {
        warn!(
            row = issue.row,
            column = issue.column,
            kind = ?issue.kind,
            value = %issue.value,
            "data quality issue"
        );
    }
    Ok(result)
}

/// Read layoff records from a CSV file.
pub fn read_records(path: &Path) -> Result<IngestResult> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    let result = read_records_from_reader(file)?;
    debug!(
        path = %path.display(),
        records = result.records.len(),
        issues = result.issues.len(),
        "read layoffs csv"
    );
    Ok(result)
}
