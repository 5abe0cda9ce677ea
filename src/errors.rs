use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::filters::City;

/// Error type for filter validation, dataset loading, and report computation.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("unknown city '{0}' (expected chicago, new york city, or washington)")]
    UnknownCity(String),
    #[error("unknown month '{0}' (expected january through june, or 'all')")]
    UnknownMonth(String),
    #[error("unknown day '{0}' (expected monday through sunday, or 'all')")]
    UnknownDay(String),
    #[error("no dataset for {city}: '{}' does not exist", .path.display())]
    DatasetMissing { city: City, path: PathBuf },
    #[error("malformed record at data row {row}: {reason}")]
    MalformedRecord { row: usize, reason: String },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("no trips match the current filters")]
    EmptyTable,
}
