//! Course lookup: filter, summarize, and package the result for display.

use serde::Serialize;
use tracing::debug;

use crate::error::FceError;
use crate::output::{format_summary, InfoTable};
use crate::record::Record;
use crate::Result;

use super::filter::CourseFilter;
use super::summary::{summarize, CourseSummary, DEFAULT_TOP};

/// Options for a course lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryOptions {
    /// Which records belong to the course
    pub filter: CourseFilter,
    /// Number of recent entries in the summary
    pub top: usize,
    /// Show every matching entry instead of only the summarized ones
    pub verbose: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            filter: CourseFilter::default(),
            top: DEFAULT_TOP,
            verbose: false,
        }
    }
}

impl QueryOptions {
    /// Create options for `courseno` with default settings.
    pub fn new(courseno: impl Into<String>) -> Self {
        Self {
            filter: CourseFilter::new(courseno),
            ..Self::default()
        }
    }

    /// Set whether summer entries are dropped.
    pub fn exclude_summer(mut self, exclude: bool) -> Self {
        self.filter = self.filter.exclude_summer(exclude);
        self
    }

    /// Set the number of recent entries summarized.
    pub fn top(mut self, top: usize) -> Self {
        self.top = top;
        self
    }

    /// Set verbose mode.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Result of a course lookup.
#[derive(Debug, Clone, Serialize)]
pub struct CourseReport<'a> {
    /// Statistics over the most recent entries
    pub summary: CourseSummary<'a>,
    /// Entries shown in the table
    pub table: InfoTable,
}

impl CourseReport<'_> {
    /// Summary block followed by the entry table.
    pub fn render_text(&self) -> String {
        let mut out = format_summary(&self.summary);
        out.push_str(&self.table.render());
        out
    }
}

/// Look up one course in `records`.
///
/// Returns [`FceError::NoData`] when no record passes the filter.
pub fn run_query<'a>(records: &'a [Record], options: &QueryOptions) -> Result<CourseReport<'a>> {
    let matching = options.filter.apply(records);
    debug!(
        courseno = %options.filter.courseno,
        total = records.len(),
        matching = matching.len(),
        "filtered records"
    );
    if matching.is_empty() {
        return Err(FceError::NoData);
    }

    let summary = summarize(&matching, options.top)?;
    let table = if options.verbose {
        InfoTable::from_records(&matching)
    } else {
        InfoTable::from_records(&summary.records)
    };

    Ok(CourseReport { summary, table })
}
