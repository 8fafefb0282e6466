//! Most-recent-N course summary.
//!
//! The summary describes a course by its latest offerings: the `top` entries
//! with the highest year, and the mean hours and rating across them.

use std::cmp::Reverse;

use serde::Serialize;
use tracing::debug;

use crate::error::FceError;
use crate::record::Record;
use crate::Result;

/// Number of recent entries summarized when none is given.
pub const DEFAULT_TOP: usize = 6;

/// Aggregated statistics for the recent entries of one course.
#[derive(Debug, Clone, Serialize)]
pub struct CourseSummary<'a> {
    /// Course number, as an integer
    pub courseno: i64,
    /// Course name, from the first selected entry
    pub coursename: String,
    /// Department, from the first selected entry
    pub department: String,
    /// Mean weekly hours
    pub avg_hours: f64,
    /// Mean overall rating
    pub avg_rating: f64,
    /// The entries the averages were taken over, newest first
    pub records: Vec<&'a Record>,
}

impl<'a> CourseSummary<'a> {
    /// Compute statistics over `records`.
    ///
    /// Descriptive fields come from the first record; the set is assumed to
    /// hold a single course.
    pub fn from_records(records: Vec<&'a Record>) -> Result<Self> {
        let first: &'a Record = *records.first().ok_or(FceError::EmptyInput)?;

        let hours = records
            .iter()
            .map(|r| r.hours_value())
            .collect::<Result<Vec<_>>>()?;
        let ratings = records
            .iter()
            .map(|r| r.rating_value())
            .collect::<Result<Vec<_>>>()?;

        Ok(CourseSummary {
            courseno: first.courseno_value()?,
            coursename: first.coursename.clone(),
            department: first.department.clone(),
            avg_hours: mean(&hours),
            avg_rating: mean(&ratings),
            records,
        })
    }
}

/// Pick the `top` newest records by year.
///
/// The sort is stable, so entries from the same year keep their input
/// order. Asking for more records than exist returns them all.
pub fn select_recent<'a>(records: &[&'a Record], top: usize) -> Result<Vec<&'a Record>> {
    let mut keyed = records
        .iter()
        .map(|&r| r.year_value().map(|year| (year, r)))
        .collect::<Result<Vec<_>>>()?;

    keyed.sort_by_key(|&(year, _)| Reverse(year));
    keyed.truncate(top);

    Ok(keyed.into_iter().map(|(_, r)| r).collect())
}

/// Select the `top` newest records and summarize them.
pub fn summarize<'a>(records: &[&'a Record], top: usize) -> Result<CourseSummary<'a>> {
    let recent = select_recent(records, top)?;
    debug!(available = records.len(), selected = recent.len(), "summarizing");
    CourseSummary::from_records(recent)
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
