// File: crates/chart-data/src/data.rs
// Summary: Input data model: leaf datum, named series, and the two container shapes.

use serde::{Deserialize, Serialize};

/// A single data point within a series' `values`.
///
/// The coordinate fields are optional and only consulted by the summary's
/// coordinate-extent calculations (bubble/scatter charts).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Datum {
    pub key: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

impl Datum {
    pub fn new(key: impl Into<String>, value: f64) -> Self {
        Self { key: key.into(), value, x: None, y: None, z: None }
    }

    pub fn with_coords(mut self, x: f64, y: f64, z: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self.z = Some(z);
        self
    }
}

/// A named group of leaf records, e.g. one line on a line chart or one
/// bar color in a grouped bar chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub key: String,
    pub values: Vec<Datum>,
}

impl Series {
    pub fn new(key: impl Into<String>, values: Vec<Datum>) -> Self {
        Self { key: key.into(), values }
    }
}

/// Which of the two input shapes was detected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataShape {
    SingleSeries,
    MultiSeries,
}

/// Chart input: either one named series or a sequence of them.
///
/// Untagged so JSON deserialization matches the shape rule directly: an
/// object carrying a top-level `key` is `Single`, an array is `Multi`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Data {
    Single(Series),
    Multi(Vec<Series>),
}

impl Data {
    pub fn shape(&self) -> DataShape {
        match self {
            Data::Single(_) => DataShape::SingleSeries,
            Data::Multi(_) => DataShape::MultiSeries,
        }
    }
}

impl From<Series> for Data {
    fn from(series: Series) -> Self {
        Data::Single(series)
    }
}

impl From<Vec<Series>> for Data {
    fn from(list: Vec<Series>) -> Self {
        Data::Multi(list)
    }
}
