//! CSV discovery and row loading.
//!
//! Export files are plain comma-separated text with no quoting, so rows are
//! split on every `,`. Blank lines are skipped and every other line must hold
//! a full record.

use std::fs::File;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use tracing::{debug, warn};

use crate::error::FceError;
use crate::record::{Field, Record};
use crate::Result;

/// Default sub-directory holding the exports.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Default file pattern inside the data directory.
pub const DEFAULT_PATTERN: &str = "*.csv";

/// Marker found in the department column of some co-taught entries. Those
/// rows carry one extra leading column, which is dropped on load.
const COTAUGHT_MARKER: &str = "co-taught";

/// Where to look for export files.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Directory holding the CSV exports
    pub data_dir: PathBuf,
    /// Glob pattern, relative to `data_dir`
    pub pattern: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            pattern: DEFAULT_PATTERN.to_string(),
        }
    }
}

impl LoaderConfig {
    /// Create a config reading `data/*.csv` relative to the process.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config reading `<dir>/data/*.csv`.
    pub fn from_working_dir(dir: impl AsRef<Path>) -> Self {
        Self::new().data_dir(dir.as_ref().join(DEFAULT_DATA_DIR))
    }

    /// Set the data directory.
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Set the file pattern.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }
}

/// Find the export files named by `config`, sorted by path.
///
/// A missing data directory is not an error; it simply holds no files.
/// Hidden files are skipped.
pub fn discover_files(config: &LoaderConfig) -> Result<Vec<PathBuf>> {
    if !config.data_dir.is_dir() {
        warn!(dir = %config.data_dir.display(), "data directory not found");
        return Ok(Vec::new());
    }

    let full = format!(
        "{}/{}",
        Pattern::escape(&config.data_dir.to_string_lossy()),
        config.pattern
    );
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };
    let paths = glob::glob_with(&full, options).map_err(|e| FceError::InvalidGlob {
        pattern: config.pattern.clone(),
        message: e.to_string(),
    })?;

    let mut files = Vec::new();
    for entry in paths {
        let path = entry.map_err(|e| FceError::FileRead {
            path: e.path().to_path_buf(),
            source: e.into_error(),
        })?;
        if path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Read every record from a single export file.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| FceError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(file);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|source| FceError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        if is_blank(&row) {
            continue;
        }

        let mut fields: Vec<&str> = row.iter().collect();
        drop_cotaught_column(&mut fields);

        // Rows are validated whatever course they belong to, so one short row
        // fails the whole load.
        let record = Record::from_fields(&fields).map_err(|e| FceError::BadRow {
            path: path.to_path_buf(),
            line: row.position().map_or(0, |p| p.line()),
            source: Box::new(e),
        })?;
        records.push(record);
    }

    debug!(file = %path.display(), count = records.len(), "read records");
    Ok(records)
}

/// Load the records of every export file named by `config`, file by file.
pub fn load_records(config: &LoaderConfig) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    for path in discover_files(config)? {
        records.extend(read_records(&path)?);
    }
    debug!(count = records.len(), "loaded records");
    Ok(records)
}

/// A line with nothing but whitespace on it.
fn is_blank(row: &csv::StringRecord) -> bool {
    row.len() <= 1 && row.iter().all(|f| f.trim().is_empty())
}

/// Remove the department column when it holds the co-taught marker. All
/// later columns shift left by one.
fn drop_cotaught_column(fields: &mut Vec<&str>) {
    let idx = Field::Department.index();
    if fields.get(idx).is_some_and(|f| f.contains(COTAUGHT_MARKER)) {
        fields.remove(idx);
    }
}
