//! Row-level data-quality warnings raised while reading.

use serde::Serialize;

/// Category of a data-quality warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Date text that matches no accepted format; read as null.
    MalformedDate,
    /// Integer text that does not parse; read as null.
    MalformedInteger,
    /// Decimal text that does not parse; read as null.
    MalformedDecimal,
    /// Percentage outside `[0, 1]`; kept as-is.
    PercentageOutOfRange,
}

/// A single warning tied to a data row (1-based, header excluded).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngestIssue {
    pub row: usize,
    pub column: &'static str,
    pub kind: IssueKind,
    pub value: String,
}

impl std::fmt::Display for IngestIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self.kind {
            IssueKind::MalformedDate => "malformed date",
            IssueKind::MalformedInteger => "malformed integer",
            IssueKind::MalformedDecimal => "malformed decimal",
            IssueKind::PercentageOutOfRange => "percentage outside [0, 1]",
        };
        write!(f, "row {} {}: {label} '{}'", self.row, self.column, self.value)
    }
}
