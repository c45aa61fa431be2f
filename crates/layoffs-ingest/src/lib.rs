//! Layoff data ingestion.
//!
//! Loads the raw layoffs CSV into [`Record`](layoffs_model::Record)s.
//! Row-level problems (unparseable dates, out-of-range percentages) never
//! fail the load; they are returned as [`IngestIssue`]s and logged.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use layoffs_ingest::read_records;
//!
//! let result = read_records(Path::new("layoffs.csv"))?;
//! println!("{} records, {} issues", result.records.len(), result.issues.len());
//! ```

mod error;
mod issues;
mod reader;
mod values;

// === Error Types ===
pub use error::{IngestError, Result};

// === Data-Quality Warnings ===
pub use issues::{IngestIssue, IssueKind};

// === CSV Reading ===
pub use reader::{IngestResult, read_records, read_records_from_reader};

// === Value Parsing ===
pub use values::{InvalidValue, parse_date, parse_decimal, parse_integer, parse_text};
