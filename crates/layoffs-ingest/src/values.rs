//! Cell value parsing.
//!
//! Each parser returns `Ok(None)` for a null token and `Err(InvalidValue)` for text
//! that is present but unparseable, so the reader can raise a warning.
//!
//! Text cells keep blank values as `Some`; only the tokens in
//! [`NULL_TOKENS`](layoffs_model::NULL_TOKENS) read as null. Numeric and date
//! cells also read a blank value as null.

use chrono::NaiveDate;
use thiserror::Error;

use layoffs_model::{is_blank, is_null_token};

/// Text that is present but does not parse as the column's type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unparseable value")]
pub struct InvalidValue;

/// `i64::MIN` and `i64::MAX + 1` are both exact in `f64`.
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

/// Date formats accepted for `date`, tried in order.
const DATE_FORMATS: [&str; 2] = ["%m/%d/%Y", "%Y-%m-%d"];

fn is_missing(value: &str) -> bool {
    is_blank(value) || is_null_token(value)
}

/// Text cell; whitespace is preserved so the Normalizer sees the raw value.
pub fn parse_text(value: &str) -> Option<String> {
    if is_null_token(value) {
        None
    } else {
        Some(value.to_string())
    }
}

/// Integer cell, accepting a zero fraction such as `"500.0"`.
///
/// Values outside the `i64` range are rejected rather than saturated.
pub fn parse_integer(value: &str) -> Result<Option<i64>, InvalidValue> {
    if is_missing(value) {
        return Ok(None);
    }
    let trimmed = value.trim();
    if let Ok(parsed) = trimmed.parse::<i64>() {
        return Ok(Some(parsed));
    }
    match trimmed.parse::<f64>() {
        Ok(parsed) if parsed.fract() == 0.0 && (I64_LOWER..I64_UPPER).contains(&parsed) => {
            Ok(Some(parsed as i64))
        }
        _ => Err(InvalidValue),
    }
}

pub fn parse_decimal(value: &str) -> Result<Option<f64>, InvalidValue> {
    if is_missing(value) {
        return Ok(None);
    }
    match value.trim().parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Ok(Some(parsed)),
        _ => Err(InvalidValue),
    }
}

/// Date cell in `M/D/YYYY` or ISO `YYYY-MM-DD` form.
pub fn parse_date(value: &str) -> Result<Option<NaiveDate>, InvalidValue> {
    if is_missing(value) {
        return Ok(None);
    }
    let trimmed = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .map(Some)
        .ok_or(InvalidValue)
}
