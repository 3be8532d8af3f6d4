use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TraceError {
    #[error("failed to open trace {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed trace CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: invalid {field} timestamp {value:?}")]
    Timestamp {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("row {row}: job {job} ends before it starts")]
    NegativeDuration { row: usize, job: String },

    #[error("row {row}: invalid NODES_REQUESTED {value}")]
    NodeCount { row: usize, value: f64 },
}
