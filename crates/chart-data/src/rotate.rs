// File: crates/chart-data/src/rotate.rs
// Summary: Positional row/column pivot for multi-series data.

use crate::data::Series;

/// Pivot series and leaves: each output series corresponds to one leaf key
/// of the first input series, and its `values` carry one entry per input
/// series with the entry's `key` rewritten to that series' key. All other
/// leaf fields (value, coordinates) are carried over unchanged.
///
/// Pairing is by positional index, not by key matching. Callers must pass
/// a rectangular dataset: every series with the same leaf count in the
/// same key order. Panics when a later series is shorter than the first.
pub fn rotate(list: &[Series]) -> Vec<Series> {
    let Some(first) = list.first() else {
        return Vec::new();
    };
    first
        .values
        .iter()
        .enumerate()
        .map(|(i, leaf)| Series {
            key: leaf.key.clone(),
            values: list
                .iter()
                .map(|series| {
                    let mut datum = series.values[i].clone();
                    datum.key = series.key.clone();
                    datum
                })
                .collect(),
        })
        .collect()
}
