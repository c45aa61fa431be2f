//! Grouping keys derived from a [`Record`].

use chrono::NaiveDate;

use crate::record::Record;

/// The full nine-field tuple used for duplicate detection.
///
/// The percentage is stored as raw bits so the key can be hashed. Negative
/// zero is folded into zero first, so numerically equal percentages share a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IdentityKey {
    company: String,
    location: String,
    industry: Option<String>,
    total_laid_off: Option<i64>,
    percentage_bits: Option<u64>,
    layoff_date: Option<NaiveDate>,
    stage: Option<String>,
    country: Option<String>,
    funds_raised_millions: Option<i64>,
}

fn percentage_bits(value: f64) -> u64 {
    if value == 0.0 { 0.0f64.to_bits() } else { value.to_bits() }
}

impl IdentityKey {
    pub fn of(record: &Record) -> Self {
        Self {
            company: record.company.clone(),
            location: record.location.clone(),
            industry: record.industry.clone(),
            total_laid_off: record.total_laid_off,
            percentage_bits: record.percentage_laid_off.map(percentage_bits),
            layoff_date: record.layoff_date,
            stage: record.stage.clone(),
            country: record.country.clone(),
            funds_raised_millions: record.funds_raised_millions,
        }
    }

    /// True when any nullable field of the key is null.
    pub fn has_null(&self) -> bool {
        self.industry.is_none()
            || self.total_laid_off.is_none()
            || self.percentage_bits.is_none()
            || self.layoff_date.is_none()
            || self.stage.is_none()
            || self.country.is_none()
            || self.funds_raised_millions.is_none()
    }
}

/// The `(company, location)` pair used to match records for imputation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityKey {
    pub company: String,
    pub location: String,
}

impl EntityKey {
    pub fn of(record: &Record) -> Self {
        Self {
            company: record.company.clone(),
            location: record.location.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_key_distinguishes_null_from_value() {
        let a = Record::new("Acme", "NYC");
        let b = Record::new("Acme", "NYC").with_total(500);
        assert_ne!(IdentityKey::of(&a), IdentityKey::of(&b));
        assert!(IdentityKey::of(&a).has_null());
    }

    #[test]
    fn fully_populated_key_has_no_null() {
        let record = Record::new("Acme", "NYC")
            .with_industry("Retail")
            .with_total(10)
            .with_percentage(0.1)
            .with_date(NaiveDate::from_ymd_opt(2022, 1, 1).unwrap())
            .with_stage("Post-IPO")
            .with_country("United States")
            .with_funds(20);
        assert!(!IdentityKey::of(&record).has_null());
    }

    #[test]
    fn signed_zero_percentages_share_a_key() {
        let positive = Record::new("Acme", "NYC").with_percentage(0.0);
        let negative = Record::new("Acme", "NYC").with_percentage(-0.0);
        assert_eq!(IdentityKey::of(&positive), IdentityKey::of(&negative));
    }
}
