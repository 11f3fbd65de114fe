//! Error types for the data-loader crate.
//!
//! Every failure that can happen while turning a CSV export into a
//! [`Dataset`](crate::Dataset) is surfaced at load time, so callers learn
//! about an unusable dataset before the first query is served.

use thiserror::Error;

/// Errors that can occur during dataset loading and parsing
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Line in data file couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// A data field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Expected number of fields in a line doesn't match the header
    #[error("Expected {expected} fields but found {found} in line {line}")]
    FieldCountMismatch {
        expected: usize,
        found: usize,
        line: usize,
    },

    /// A required column is absent from the header row
    #[error("Missing required column: {column}")]
    MissingColumn { column: String },

    /// The dataset has no rows, so no query can ever be answered
    #[error("Dataset is empty: no restaurants to recommend from")]
    EmptyDataset,

    /// Data validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
