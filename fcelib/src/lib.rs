//! # fcelib
//!
//! A library for looking up Faculty Course Evaluation (FCE) results from local
//! CSV exports.
//!
//! ## Overview
//!
//! A lookup is a single pass through four stages:
//!
//! - **Source**: Read every `*.csv` export under a data directory into [`Record`]s
//! - **Filter**: Keep the entries of one course, minus non-comparable sections
//! - **Summary**: Average hours and rating over the most recent entries
//! - **Output**: Format the summary and an aligned table of entries
//!
//! Every stage returns plain data; printing is left to the caller.
//!
//! ## Example
//!
//! ```rust
//! use fcelib::{load_records, run_query, LoaderConfig, QueryOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::create_dir(dir.path().join("data")).unwrap();
//! let mut row = vec![""; 21];
//! row[0] = "Fall";
//! row[1] = "2015";
//! row[2] = "Doe John";
//! row[3] = "CS";
//! row[4] = "15213";
//! row[5] = "Intro to Computer Systems";
//! row[6] = "A";
//! row[11] = "11.5";
//! row[20] = "4.2";
//! fs::write(dir.path().join("data/fce.csv"), row.join(",")).unwrap();
//!
//! let records = load_records(&LoaderConfig::from_working_dir(dir.path())).unwrap();
//! let report = run_query(&records, &QueryOptions::new("15213")).unwrap();
//!
//! assert_eq!(report.summary.courseno, 15213);
//! assert!(report
//!     .render_text()
//!     .starts_with("15213 - Intro to Computer Systems -CS\n"));
//! ```

pub mod error;
pub mod output;
pub mod query;
pub mod record;
pub mod source;

pub use error::FceError;
pub use output::{format_summary, round_tenth, InfoTable};
pub use query::{
    run_query, select_recent, summarize, CourseFilter, CourseReport, CourseSummary, QueryOptions,
    DEFAULT_TOP,
};
pub use record::{Field, Record, MIN_FIELDS};
pub use source::{discover_files, load_records, read_records, LoaderConfig};

/// Result type for fcelib operations
pub type Result<T> = std::result::Result<T, FceError>;
