//! The layoff event record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Column names in source order.
pub const FIELD_NAMES: [&str; 9] = [
    "company",
    "location",
    "industry",
    "total_laid_off",
    "percentage_laid_off",
    "date",
    "stage",
    "country",
    "funds_raised_millions",
];

/// One layoff event report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub company: String,
    pub location: String,
    pub industry: Option<String>,
    pub total_laid_off: Option<i64>,
    /// Fraction of the workforce in `[0, 1]`; `1.0` means the company shut down.
    pub percentage_laid_off: Option<f64>,
    pub layoff_date: Option<NaiveDate>,
    pub stage: Option<String>,
    pub country: Option<String>,
    pub funds_raised_millions: Option<i64>,
}

impl Record {
    /// Create a record with only the non-nullable fields set.
    pub fn new(company: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            location: location.into(),
            industry: None,
            total_laid_off: None,
            percentage_laid_off: None,
            layoff_date: None,
            stage: None,
            country: None,
            funds_raised_millions: None,
        }
    }

    #[must_use]
    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    #[must_use]
    pub fn with_total(mut self, total: i64) -> Self {
        self.total_laid_off = Some(total);
        self
    }

    #[must_use]
    pub fn with_percentage(mut self, percentage: f64) -> Self {
        self.percentage_laid_off = Some(percentage);
        self
    }

    #[must_use]
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.layoff_date = Some(date);
        self
    }

    #[must_use]
    pub fn with_stage(mut self, stage: impl Into<String>) -> Self {
        self.stage = Some(stage.into());
        self
    }

    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    #[must_use]
    pub fn with_funds(mut self, funds: i64) -> Self {
        self.funds_raised_millions = Some(funds);
        self
    }

    /// True when the record reports the whole workforce laid off.
    pub fn is_total_shutdown(&self) -> bool {
        self.percentage_laid_off == Some(1.0)
    }

    /// True when at least one of the layoff measures is present.
    pub fn has_layoff_signal(&self) -> bool {
        self.total_laid_off.is_some() || self.percentage_laid_off.is_some()
    }

    /// Industry value when present and not blank.
    pub fn known_industry(&self) -> Option<&str> {
        self.industry.as_deref().filter(|value| !is_blank(value))
    }
}

/// Cell text read as null, compared case-insensitively after trimming.
pub const NULL_TOKENS: [&str; 4] = ["NULL", "NONE", "NAN", "N/A"];

/// True for empty or whitespace-only text.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// True when the text is one of [`NULL_TOKENS`]. Blank text is not a null token.
pub fn is_null_token(value: &str) -> bool {
    let trimmed = value.trim();
    NULL_TOKENS
        .iter()
        .any(|token| trimmed.eq_ignore_ascii_case(token))
}
