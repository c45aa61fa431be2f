//! Industry imputation from records of the same company and location.

use std::collections::HashMap;

use layoffs_model::{CleaningOptions, EntityKey, Record};

fn is_missing(industry: Option<&str>, options: &CleaningOptions) -> bool {
    match industry {
        None => true,
        Some(value) => options.blank_is_null && value.trim().is_empty(),
    }
}

/// Map each `(company, location)` to the first known industry in scan order.
pub fn build_industry_lookup(records: &[Record]) -> HashMap<EntityKey, String> {
    let mut lookup = HashMap::new();
    for record in records {
        let Some(industry) = record.known_industry() else {
            continue;
        };
        lookup
            .entry(EntityKey::of(record))
            .or_insert_with(|| industry.to_string());
    }
    lookup
}

/// Fill missing industries; returns the new set and the number filled.
///
/// A record with no matching source keeps its missing value.
pub fn impute_industries(records: Vec<Record>, options: &CleaningOptions) -> (Vec<Record>, usize) {
    let lookup = build_industry_lookup(&records);
    let mut imputed = 0usize;
    let records = records
        .into_iter()
        .map(|mut record| {
            if is_missing(record.industry.as_deref(), options)
                && let Some(industry) = lookup.get(&EntityKey::of(&record))
            {
                record.industry = Some(industry.clone());
                imputed += 1;
            }
            record
        })
        .collect();
    (records, imputed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_from_same_company_and_location() {
        let records = vec![
            Record::new("Zeta", "SF"),
            Record::new("Zeta", "SF").with_industry("Crypto"),
        ];
        let (records, imputed) = impute_industries(records, &CleaningOptions::default());
        assert_eq!(imputed, 1);
        assert_eq!(records[0].industry.as_deref(), Some("Crypto"));
    }

    #[test]
    fn other_location_is_not_a_source() {
        let records = vec![
            Record::new("Zeta", "SF"),
            Record::new("Zeta", "NYC").with_industry("Retail"),
        ];
        let (records, imputed) = impute_industries(records, &CleaningOptions::default());
        assert_eq!(imputed, 0);
        assert_eq!(records[0].industry, None);
    }

    #[test]
    fn first_known_value_wins() {
        let records = vec![
            Record::new("Zeta", "SF").with_industry(""),
            Record::new("Zeta", "SF").with_industry("Retail"),
            Record::new("Zeta", "SF").with_industry("Food"),
        ];
        let (records, _) = impute_industries(records, &CleaningOptions::default());
        assert_eq!(records[0].industry.as_deref(), Some("Retail"));
        assert_eq!(records[2].industry.as_deref(), Some("Food"));
    }

    #[test]
    fn blank_kept_when_blank_is_not_null() {
        let options = CleaningOptions {
            blank_is_null: false,
            ..CleaningOptions::default()
        };
        let records = vec![
            Record::new("Zeta", "SF").with_industry(" "),
            Record::new("Zeta", "SF").with_industry("Retail"),
        ];
        let (records, imputed) = impute_industries(records, &options);
        assert_eq!(imputed, 0);
        assert_eq!(records[0].industry.as_deref(), Some(" "));
    }

    #[test]
    fn no_source_leaves_record_untouched() {
        let records = vec![Record::new("Solo", "LA")];
        let (out, imputed) = impute_industries(records.clone(), &CleaningOptions::default());
        assert_eq!(out, records);
        assert_eq!(imputed, 0);
    }
}
