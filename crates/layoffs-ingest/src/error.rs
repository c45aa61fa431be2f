//! Error types for layoff data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an ingestion run.
#[derive(Debug, Error)]
pub enum IngestError {
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV structure.
    #[error("failed to parse CSV at line {line}: {message}")]
    CsvParse { line: u64, message: String },

    /// CSV has no header row.
    #[error("CSV input is empty")]
    EmptyCsv,

    /// Required column not found in the header.
    #[error("required column '{column}' not found")]
    MissingColumn { column: &'static str },

    /// A non-nullable field is blank.
    #[error("row {row}: required field '{column}' is empty")]
    RequiredValue { row: usize, column: &'static str },
}

impl From<csv::Error> for IngestError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map_or(0, csv::Position::line);
        Self::CsvParse {
            line,
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/layoffs.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /path/to/layoffs.csv");

        let err = IngestError::MissingColumn { column: "company" };
        assert_eq!(err.to_string(), "required column 'company' not found");
    }
}
