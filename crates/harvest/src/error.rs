//! Error types for the harvest library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for harvest operations.
#[derive(Debug, Error)]
pub enum HarvestError {
    /// A foreign cell has no defined mapping to a host type.
    #[error("unsupported type in column '{column}' at row {row}: {detail}")]
    UnsupportedType {
        column: String,
        row: usize,
        detail: String,
    },

    /// A column's cell count disagrees with the frame's declared row count.
    #[error("shape mismatch in column '{column}': expected {expected} rows, found {actual}")]
    ShapeMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// A cell's representation is ambiguous between "missing" and a value
    /// that merely looks like a sentinel.
    #[error("ambiguous missingness in column '{column}' at row {row}: {detail}")]
    AmbiguousMissingness {
        column: String,
        row: usize,
        detail: String,
    },

    /// The R runtime could not be started or failed while evaluating.
    #[error("R bridge error: {0}")]
    Bridge(String),

    /// The bridge produced a payload that does not match the wire format.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// A survey listing did not have the expected columns or cell types.
    #[error("malformed survey listing: {0}")]
    SurveyListing(String),

    /// Error reading or writing a file.
    #[error("IO error for '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error from the CSV writer.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Regex compilation error (title filters are user-supplied patterns).
    #[error("regex error: {0}")]
    Regex(#[from] regex::Error),
}

/// Result type alias for harvest operations.
pub type Result<T> = std::result::Result<T, HarvestError>;
