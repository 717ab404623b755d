// File: crates/chart-data/src/lib.rs
// Summary: Core library entry point; exports the data model, summarizer, and ingest API.

pub mod data;
pub mod decimal;
pub mod error;
pub mod ingest;
pub mod prepare;
pub mod rotate;
pub mod summary;

pub use data::{Data, DataShape, Datum, Series};
pub use error::DataError;
pub use rotate::rotate;
pub use summary::{
    summarize, summarize_with, AxisExtents, AxisValues, ColumnOrder, Extent, Options, Summary,
};
