//! Conversion of records into a polars `DataFrame`.

use anyhow::{Context, Result};
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use layoffs_model::{FIELD_NAMES, Record};

fn text_column(name: &str, values: Vec<Option<String>>) -> Column {
    Series::new(name.into(), values).into_column()
}

fn int_column(name: &str, values: Vec<Option<i64>>) -> Column {
    Series::new(name.into(), values).into_column()
}

/// Build a frame with one column per record field, in source order.
///
/// Dates are stored as ISO `YYYY-MM-DD` strings.
pub fn build_record_frame(records: &[Record]) -> Result<DataFrame> {
    let [company, location, industry, total, percentage, date, stage, country, funds] =
        FIELD_NAMES;
    let columns = vec![
        text_column(company, records.iter().map(|r| Some(r.company.clone())).collect()),
        text_column(location, records.iter().map(|r| Some(r.location.clone())).collect()),
        text_column(industry, records.iter().map(|r| r.industry.clone()).collect()),
        int_column(total, records.iter().map(|r| r.total_laid_off).collect()),
        Series::new(
            percentage.into(),
            records
                .iter()
                .map(|r| r.percentage_laid_off)
                .collect::<Vec<Option<f64>>>(),
        )
        .into_column(),
        text_column(
            date,
            records
                .iter()
                .map(|r| r.layoff_date.map(|d| d.format("%Y-%m-%d").to_string()))
                .collect(),
        ),
        text_column(stage, records.iter().map(|r| r.stage.clone()).collect()),
        text_column(country, records.iter().map(|r| r.country.clone()).collect()),
        int_column(funds, records.iter().map(|r| r.funds_raised_millions).collect()),
    ];
    DataFrame::new(columns).context("build record frame")
}
