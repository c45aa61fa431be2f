//! Clean dataset persistence.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, bail};
use polars::prelude::{CsvWriter, SerWriter};
use tracing::info;

use layoffs_model::{Record, is_blank, is_null_token};

use crate::frame::build_record_frame;

/// Marker written for null cells; ingest reads it back as null.
pub const NULL_MARKER: &str = "NULL";

/// Reject values the ingest reader would not read back unchanged.
fn check_round_trip(row: usize, record: &Record) -> Result<()> {
    for (column, value) in [("company", &record.company), ("location", &record.location)] {
        if is_blank(value) {
            bail!("row {row}: {column} is blank");
        }
    }
    let optional = [
        ("industry", &record.industry),
        ("stage", &record.stage),
        ("country", &record.country),
    ];
    for (column, value) in optional {
        if let Some(text) = value
            && is_null_token(text)
        {
            bail!("row {row}: {column} value '{text}' would read back as null");
        }
    }
    Ok(())
}

/// Write the clean dataset as CSV; nulls become [`NULL_MARKER`] and blank
/// text stays an empty cell.
pub fn write_clean_csv(path: &Path, records: &[Record]) -> Result<()> {
    for (idx, record) in records.iter().enumerate() {
        check_round_trip(idx + 1, record)
            .with_context(|| format!("cannot persist {}", path.display()))?;
    }
    let mut df = build_record_frame(records)?;
    let mut file =
        File::create(path).with_context(|| format!("create {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .with_null_value(NULL_MARKER.to_string())
        .finish(&mut df)
        .with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), rows = records.len(), "wrote clean dataset");
    Ok(())
}
