//! Query processing: filter and summarize records.
//!
//! This module handles the middle stages of the pipeline - turning the loaded
//! records into the data for one course. It provides:
//!
//! - **Filter**: Course number and section rules (`CourseFilter`)
//! - **Summary**: Most recent entries and their averages (`CourseSummary`)
//! - **Report**: The whole lookup in one call (`run_query`)
//!
//! ## Example
//!
//! ```rust,ignore
//! use fcelib::query::{run_query, QueryOptions};
//!
//! let options = QueryOptions::new("15213").exclude_summer(true).top(4);
//! let report = run_query(&records, &options)?;
//! print!("{}", report.render_text());
//! ```

pub mod filter;
pub mod report;
pub mod summary;

pub use filter::CourseFilter;
pub use report::{run_query, CourseReport, QueryOptions};
pub use summary::{select_recent, summarize, CourseSummary, DEFAULT_TOP};
