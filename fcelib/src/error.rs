//! Error types for fcelib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or summarizing FCE records
#[derive(Error, Debug)]
pub enum FceError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to split a CSV file into records
    #[error("failed to parse CSV file '{path}': {source}")]
    Csv { path: PathBuf, source: csv::Error },

    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// A row has fewer fields than the record schema needs
    #[error("record has {found} fields, at least {required} required")]
    ShortRecord { found: usize, required: usize },

    /// A malformed row, located in its source file
    #[error("{path}:{line}: {source}")]
    BadRow {
        path: PathBuf,
        line: u64,
        #[source]
        source: Box<FceError>,
    },

    /// A numeric field could not be parsed
    #[error("cannot parse {field} value '{value}' as a number")]
    Parse { field: &'static str, value: String },

    /// Statistics were requested over zero records
    #[error("cannot summarize an empty set of records")]
    EmptyInput,

    /// No records survived filtering for the requested course
    #[error("No data for class")]
    NoData,
}
