// File: crates/chart-data/src/error.rs
// Summary: Error type for the ingest and preparation layers.

/// Failures raised while reading datasets from CSV/JSON text or while
/// pre-processing leaf keys. The summarizer itself never returns these:
/// once a `Data` value exists, summarization is total.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing column '{0}'")]
    MissingColumn(&'static str),

    #[error("bad number '{value}' in column '{column}'")]
    BadNumber { column: &'static str, value: String },

    #[error("bad date '{value}'")]
    BadDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
