//! Per-record text normalization.
//!
//! Rules applied to every record:
//! - trim company, location, industry, stage, and country
//! - any industry starting with `Crypto` becomes exactly `Crypto`
//! - any country starting with `United States` loses its trailing periods

use layoffs_model::Record;

const CRYPTO_PREFIX: &str = "Crypto";
const UNITED_STATES_PREFIX: &str = "United States";

fn trim_owned(value: &str) -> String {
    value.trim().to_string()
}

fn canonical_industry(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.starts_with(CRYPTO_PREFIX) {
        CRYPTO_PREFIX.to_string()
    } else {
        trimmed.to_string()
    }
}

fn canonical_country(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.starts_with(UNITED_STATES_PREFIX) {
        trimmed
            .trim_end_matches(|ch: char| ch == '.' || ch.is_whitespace())
            .to_string()
    } else {
        trimmed.to_string()
    }
}

/// Normalize a single record. Null fields stay null.
pub fn normalize_record(record: &Record) -> Record {
    Record {
        company: trim_owned(&record.company),
        location: trim_owned(&record.location),
        industry: record.industry.as_deref().map(canonical_industry),
        stage: record.stage.as_deref().map(trim_owned),
        country: record.country.as_deref().map(canonical_country),
        ..record.clone()
    }
}

/// Normalize every record, returning the new set and how many records changed.
pub fn normalize_records(records: Vec<Record>) -> (Vec<Record>, usize) {
    let mut changed = 0usize;
    let normalized = records
        .into_iter()
        .map(|record| {
            let normalized = normalize_record(&record);
            if normalized != record {
                changed += 1;
            }
            normalized
        })
        .collect();
    (normalized, changed)
}
