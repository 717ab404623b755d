// File: crates/chart-data/src/ingest.rs
// Summary: CSV and JSON ingest into the chart data model.

use std::path::Path;

use indexmap::IndexMap;

use crate::data::{Data, Datum, Series};
use crate::error::DataError;

/// Parse a JSON document into [`Data`]. Shape detection follows the model's
/// untagged encoding: an object with a top-level `key` is single-series,
/// an array is multi-series.
pub fn from_json_str(text: &str) -> Result<Data, DataError> {
    Ok(serde_json::from_str(text)?)
}

/// Load a long-format CSV (`series,key,value` columns, optional `x`/`y`/`z`)
/// into a multi-series dataset. Header names match case-insensitively;
/// series are grouped in first-seen order.
pub fn multi_from_csv_path(path: impl AsRef<Path>) -> Result<Vec<Series>, DataError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    let idx = |name: &'static str| headers.iter().position(|h| h == name);

    let i_series = idx("series").ok_or(DataError::MissingColumn("series"))?;
    let i_key = idx("key").ok_or(DataError::MissingColumn("key"))?;
    let i_value = idx("value").ok_or(DataError::MissingColumn("value"))?;
    let i_x = idx("x");
    let i_y = idx("y");
    let i_z = idx("z");

    let mut groups: IndexMap<String, Vec<Datum>> = IndexMap::new();
    for rec in rdr.records() {
        let rec = rec?;
        let series_key = field(&rec, i_series).to_string();
        let mut datum = Datum::new(field(&rec, i_key), parse_number(&rec, i_value, "value")?);
        datum.x = parse_optional(&rec, i_x, "x")?;
        datum.y = parse_optional(&rec, i_y, "y")?;
        datum.z = parse_optional(&rec, i_z, "z")?;
        groups.entry(series_key).or_default().push(datum);
    }

    Ok(groups
        .into_iter()
        .map(|(key, values)| Series { key, values })
        .collect())
}

fn field<'a>(rec: &'a csv::StringRecord, i: usize) -> &'a str {
    rec.get(i).unwrap_or("").trim()
}

fn parse_number(
    rec: &csv::StringRecord,
    i: usize,
    column: &'static str,
) -> Result<f64, DataError> {
    let raw = field(rec, i);
    raw.parse::<f64>()
        .map_err(|_| DataError::BadNumber { column, value: raw.to_string() })
}

fn parse_optional(
    rec: &csv::StringRecord,
    i: Option<usize>,
    column: &'static str,
) -> Result<Option<f64>, DataError> {
    let Some(i) = i else {
        return Ok(None);
    };
    let raw = field(rec, i);
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<f64>()
        .map(Some)
        .map_err(|_| DataError::BadNumber { column, value: raw.to_string() })
}
