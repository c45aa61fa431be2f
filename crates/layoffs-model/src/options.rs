//! Configuration options for cleaning and analytics.

use serde::{Deserialize, Serialize};

/// How null fields take part in duplicate-key equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NullKeyMode {
    /// A null never equals another null, so keys containing a null are unique.
    #[default]
    Distinct,
    /// Nulls in the same field compare equal.
    Equal,
}

/// Options controlling the cleaning pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningOptions {
    /// Null semantics for the duplicate identity key.
    pub null_keys: NullKeyMode,

    /// Treat a whitespace-only industry as missing when imputing.
    pub blank_is_null: bool,
}

impl Default for CleaningOptions {
    fn default() -> Self {
        Self {
            null_keys: NullKeyMode::Distinct,
            blank_is_null: true,
        }
    }
}

impl CleaningOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_null_keys(mut self, mode: NullKeyMode) -> Self {
        self.null_keys = mode;
        self
    }
}

/// Options for the analytics views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsOptions {
    /// Rank threshold for the per-year company ranking.
    pub top_n: usize,
}

impl Default for AnalyticsOptions {
    fn default() -> Self {
        Self { top_n: 5 }
    }
}

impl std::str::FromStr for NullKeyMode {
    type Err = crate::error::ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "distinct" => Ok(Self::Distinct),
            "equal" => Ok(Self::Equal),
            _ => Err(crate::error::ModelError::InvalidValue {
                field: "null_keys",
                value: value.to_string(),
            }),
        }
    }
}
