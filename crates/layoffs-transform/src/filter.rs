use layoffs_model::Record;

/// Drop records with neither `total_laid_off` nor `percentage_laid_off`.
pub fn filter_unusable(records: Vec<Record>) -> Vec<Record> {
    records
        .into_iter()
        .filter(Record::has_layoff_signal)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_records_with_either_measure() {
        let records = vec![
            Record::new("A", "X"),
            Record::new("B", "X").with_total(10),
            Record::new("C", "X").with_percentage(0.5),
            Record::new("D", "X"),
        ];
        let kept: Vec<String> = filter_unusable(records)
            .into_iter()
            .map(|record| record.company)
            .collect();
        assert_eq!(kept, vec!["B", "C"]);
    }
}
