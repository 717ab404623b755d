// File: crates/chart-data/src/prepare.rs
// Summary: Caller-side pre-processing applied before summarization.

use chrono::NaiveDate;

use crate::data::Series;
use crate::error::DataError;

/// Parse every leaf key as a date with `fmt` (chrono format string) and
/// rewrite it to ISO `%Y-%m-%d`.
///
/// Returns a new dataset and leaves the input untouched, so the
/// summarizer keeps its pure-function-of-the-argument contract. Chart
/// assemblies that plot time on the column axis run this first.
pub fn keys_to_dates(list: &[Series], fmt: &str) -> Result<Vec<Series>, DataError> {
    list.iter()
        .map(|series| {
            let values = series
                .values
                .iter()
                .map(|d| {
                    let date = NaiveDate::parse_from_str(&d.key, fmt).map_err(|source| {
                        DataError::BadDate { value: d.key.clone(), source }
                    })?;
                    let mut datum = d.clone();
                    datum.key = date.format("%Y-%m-%d").to_string();
                    Ok(datum)
                })
                .collect::<Result<Vec<_>, DataError>>()?;
            Ok(Series { key: series.key.clone(), values })
        })
        .collect()
}
