// File: crates/chart-data/src/summary.rs
// Summary: Shape-polymorphic data summary: totals, extents, stacked extents, thresholds.

use indexmap::IndexMap;

use crate::data::{Data, DataShape, Datum, Series};
use crate::decimal::{decimal_places, round_to};

/// A `[min, max]` pair.
pub type Extent = [f64; 2];

/// Per-axis coordinate bounds. An axis is `None` when no leaf carries it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisValues {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

/// Per-axis coordinate extents. An axis is `None` when no leaf carries it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisExtents {
    pub x: Option<Extent>,
    pub y: Option<Extent>,
    pub z: Option<Extent>,
}

/// Column-key union order for multi-series input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColumnOrder {
    /// Legacy-compatible order: each series' keys are prepended ahead of
    /// the keys accumulated so far, so the last series processed dominates
    /// the front and earlier-only keys trail behind.
    #[default]
    LastSeriesFirst,
    /// Plain union in first-seen order.
    FirstSeen,
}

/// Knobs for [`summarize_with`]. The defaults reproduce the legacy output
/// exactly; see [`ColumnOrder`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub column_order: ColumnOrder,
}

/// Read-only statistics derived from one chart input, recomputed from
/// scratch on every call and consumed by scale construction.
///
/// Fields that do not apply to the detected shape are `None`, never a
/// wrong-shape value. `value_min`/`value_max`/`thresholds` are `None`
/// only when the input holds no leaves at all.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub shape: DataShape,
    /// Single-series: the series' key.
    pub row_key: Option<String>,
    /// Single-series: sum of the series' values.
    pub row_total: Option<f64>,
    /// Multi-series: each series' key, in input order.
    pub row_keys: Option<Vec<String>>,
    /// Multi-series: series key -> sum of that series' values. Duplicate
    /// series keys accumulate into the same slot.
    pub row_totals: Option<IndexMap<String, f64>>,
    pub row_totals_min: Option<f64>,
    pub row_totals_max: Option<f64>,
    /// Field names present on a leaf record.
    pub row_values_keys: Vec<String>,
    /// Single-series: every leaf key in input order, duplicates kept.
    /// Multi-series: union of leaf keys per `Options::column_order`.
    pub column_keys: Vec<String>,
    /// Multi-series: leaf key -> sum of values across series.
    pub column_totals: Option<IndexMap<String, f64>>,
    pub column_totals_min: Option<f64>,
    pub column_totals_max: Option<f64>,
    pub value_min: Option<f64>,
    pub value_max: Option<f64>,
    pub value_extent: Option<Extent>,
    /// Multi-series: `[min cumulative negative sum, max cumulative positive
    /// sum]` across series, for stacked layouts with a zero baseline.
    pub value_extent_stacked: Option<Extent>,
    pub coordinates_min: AxisValues,
    pub coordinates_max: AxisValues,
    pub coordinates_extent: AxisExtents,
    /// Largest decimal-digit count seen in any value (multi-series only;
    /// 0 for single-series, matching the legacy behaviour).
    pub max_decimal_place: u32,
    /// Values at 25/50/75/100% of the value range, rounded to
    /// `max_decimal_place` digits. Seeds a default threshold color scale.
    pub thresholds: Option<[f64; 4]>,
}

/// Summarize with default [`Options`].
pub fn summarize(data: &Data) -> Summary {
    summarize_with(data, Options::default())
}

/// Classify the input shape and compute the [`Summary`]. Pure: the input
/// is never mutated and nothing is cached between calls.
pub fn summarize_with(data: &Data, options: Options) -> Summary {
    match data {
        Data::Single(series) => summarize_single(series),
        Data::Multi(list) => summarize_multi(list, options),
    }
}

fn summarize_single(series: &Series) -> Summary {
    let row_total = series.values.iter().map(|d| d.value).sum::<f64>();
    let column_keys = series.values.iter().map(|d| d.key.clone()).collect();

    let mut values = Running::default();
    let mut coords = RunningCoords::default();
    for d in &series.values {
        values.add(d.value);
        coords.add(d);
    }

    // The legacy summarizer only counts decimal places for multi-series
    // input, so single-series thresholds round to whole numbers.
    let max_decimal_place = 0;

    Summary {
        shape: DataShape::SingleSeries,
        row_key: Some(series.key.clone()),
        row_total: Some(row_total),
        row_keys: None,
        row_totals: None,
        row_totals_min: None,
        row_totals_max: None,
        row_values_keys: leaf_field_names(series.values.first()),
        column_keys,
        column_totals: None,
        column_totals_min: None,
        column_totals_max: None,
        value_min: values.min(),
        value_max: values.max(),
        value_extent: values.extent(),
        value_extent_stacked: None,
        coordinates_min: coords.min(),
        coordinates_max: coords.max(),
        coordinates_extent: coords.extent(),
        max_decimal_place,
        thresholds: thresholds_of(values, max_decimal_place),
    }
}

fn summarize_multi(list: &[Series], options: Options) -> Summary {
    let row_keys: Vec<String> = list.iter().map(|s| s.key.clone()).collect();

    let mut row_totals: IndexMap<String, f64> = IndexMap::new();
    for series in list {
        let total: f64 = series.values.iter().map(|d| d.value).sum();
        *row_totals.entry(series.key.clone()).or_insert(0.0) += total;
    }

    let mut column_totals: IndexMap<String, f64> = IndexMap::new();
    let mut values = Running::default();
    let mut coords = RunningCoords::default();
    let mut max_decimal_place = 0u32;
    for series in list {
        for d in &series.values {
            *column_totals.entry(d.key.clone()).or_insert(0.0) += d.value;
            values.add(d.value);
            coords.add(d);
            max_decimal_place = max_decimal_place.max(decimal_places(d.value));
        }
    }

    let column_keys = match options.column_order {
        ColumnOrder::LastSeriesFirst => column_keys_last_first(list),
        ColumnOrder::FirstSeen => column_totals.keys().cloned().collect(),
    };

    let mut row_bounds = Running::default();
    for &total in row_totals.values() {
        row_bounds.add(total);
    }
    let mut column_bounds = Running::default();
    for &total in column_totals.values() {
        column_bounds.add(total);
    }

    Summary {
        shape: DataShape::MultiSeries,
        row_key: None,
        row_total: None,
        row_keys: Some(row_keys),
        row_totals_min: row_bounds.min(),
        row_totals_max: row_bounds.max(),
        row_totals: Some(row_totals),
        row_values_keys: leaf_field_names(list.first().and_then(|s| s.values.first())),
        column_keys,
        column_totals_min: column_bounds.min(),
        column_totals_max: column_bounds.max(),
        column_totals: Some(column_totals),
        value_min: values.min(),
        value_max: values.max(),
        value_extent: values.extent(),
        value_extent_stacked: Some(stacked_extent(list)),
        coordinates_min: coords.min(),
        coordinates_max: coords.max(),
        coordinates_extent: coords.extent(),
        max_decimal_place,
        thresholds: thresholds_of(values, max_decimal_place),
    }
}

// ---- helpers ----------------------------------------------------------------

/// Running min/max seeded from the first value added, never from a
/// numeric sentinel, so all-negative or all-identical data resolves
/// correctly.
#[derive(Clone, Copy, Debug, Default)]
struct Running(Option<(f64, f64)>);

impl Running {
    fn add(&mut self, v: f64) {
        self.0 = Some(match self.0 {
            None => (v, v),
            Some((lo, hi)) => (lo.min(v), hi.max(v)),
        });
    }
    fn min(self) -> Option<f64> {
        self.0.map(|(lo, _)| lo)
    }
    fn max(self) -> Option<f64> {
        self.0.map(|(_, hi)| hi)
    }
    fn extent(self) -> Option<Extent> {
        self.0.map(|(lo, hi)| [lo, hi])
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct RunningCoords {
    x: Running,
    y: Running,
    z: Running,
}

impl RunningCoords {
    fn add(&mut self, d: &Datum) {
        if let Some(v) = d.x {
            self.x.add(v);
        }
        if let Some(v) = d.y {
            self.y.add(v);
        }
        if let Some(v) = d.z {
            self.z.add(v);
        }
    }
    fn min(&self) -> AxisValues {
        AxisValues { x: self.x.min(), y: self.y.min(), z: self.z.min() }
    }
    fn max(&self) -> AxisValues {
        AxisValues { x: self.x.max(), y: self.y.max(), z: self.z.max() }
    }
    fn extent(&self) -> AxisExtents {
        AxisExtents { x: self.x.extent(), y: self.y.extent(), z: self.z.extent() }
    }
}

/// Legacy column-key union: for each series in order, that series' keys
/// are placed ahead of the keys accumulated so far, then duplicates are
/// dropped keeping the first occurrence.
fn column_keys_last_first(list: &[Series]) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for series in list {
        let mut merged: Vec<String> = Vec::with_capacity(series.values.len() + keys.len());
        for key in series.values.iter().map(|d| d.key.clone()).chain(keys.drain(..)) {
            if !merged.contains(&key) {
                merged.push(key);
            }
        }
        keys = merged;
    }
    keys
}

/// Per-series same-sign cumulative sums; zero contributes to neither side.
/// Each bound stays 0 when no series produced that sign.
fn stacked_extent(list: &[Series]) -> Extent {
    let mut min_negative = 0.0f64;
    let mut max_positive = 0.0f64;
    for series in list {
        let mut negative = 0.0f64;
        let mut positive = 0.0f64;
        for d in &series.values {
            if d.value < 0.0 {
                negative += d.value;
            } else if d.value > 0.0 {
                positive += d.value;
            }
        }
        min_negative = min_negative.min(negative);
        max_positive = max_positive.max(positive);
    }
    [min_negative, max_positive]
}

fn thresholds_of(values: Running, places: u32) -> Option<[f64; 4]> {
    let [lo, hi] = values.extent()?;
    let distance = hi - lo;
    Some([0.25, 0.5, 0.75, 1.0].map(|fraction| round_to(lo + fraction * distance, places)))
}

fn leaf_field_names(first: Option<&Datum>) -> Vec<String> {
    let mut names = vec!["key".to_string(), "value".to_string()];
    if let Some(d) = first {
        if d.x.is_some() {
            names.push("x".to_string());
        }
        if d.y.is_some() {
            names.push("y".to_string());
        }
        if d.z.is_some() {
            names.push("z".to_string());
        }
    }
    names
}
