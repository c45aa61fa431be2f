//! Cleaning pipeline for layoff records.
//!
//! Stages run strictly in order, each consuming the full output of the
//! previous one and returning a new record set:
//!
//! 1. **Dedupe**: keep the first record of every identity-key group
//! 2. **Normalize**: trim text and canonicalize industry and country values
//! 3. **Impute**: fill missing industries from the same company and location
//! 4. **Filter**: drop records with neither layoff count nor percentage

pub mod dedupe;
pub mod filter;
pub mod impute;
pub mod normalization;
pub mod pipeline;

pub use dedupe::{dedupe_records, rank_duplicates};
pub use filter::filter_unusable;
pub use impute::{build_industry_lookup, impute_industries};
pub use normalization::{normalize_record, normalize_records};
pub use pipeline::{CleanOutput, CleaningReport, clean};
