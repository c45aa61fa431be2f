//! Core data model for the layoffs cleaning pipeline.
//!
//! A [`Record`] is one layoff event report with the nine source fields.
//! Pipeline stages in `layoffs-transform` and the views in
//! `layoffs-analytics` only ever see this type.

pub mod error;
pub mod keys;
pub mod options;
pub mod record;

pub use error::{ModelError, Result};
pub use keys::{EntityKey, IdentityKey};
pub use options::{AnalyticsOptions, CleaningOptions, NullKeyMode};
pub use record::{FIELD_NAMES, NULL_TOKENS, Record, is_blank, is_null_token};
