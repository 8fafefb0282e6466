//! Course filtering.
//!
//! Selects the entries of one course, dropping sections that are not
//! comparable with the main campus offering and entries in the old export
//! format.

use serde::Serialize;

use crate::record::Record;

/// Section marker of the Qatar campus offering.
const QATAR_SECTION: &str = "W";

/// Section marker of legacy-format entries.
const LEGACY_SECTION: &str = "3";

/// Semester dropped when summer entries are excluded.
const SUMMER: &str = "Summer";

/// Which records to keep for a course lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CourseFilter {
    /// Course number to match exactly
    pub courseno: String,
    /// Drop summer-semester entries
    pub exclude_summer: bool,
}

impl CourseFilter {
    /// Create a filter matching `courseno`, summers included.
    pub fn new(courseno: impl Into<String>) -> Self {
        Self {
            courseno: courseno.into(),
            exclude_summer: false,
        }
    }

    /// Set whether summer entries are dropped.
    pub fn exclude_summer(mut self, exclude: bool) -> Self {
        self.exclude_summer = exclude;
        self
    }

    /// Check if a record belongs in the result.
    ///
    /// A record matches if:
    /// 1. Its course number equals the target exactly
    /// 2. Its section contains neither `W` nor `3`
    /// 3. It has a rating
    /// 4. It is not a summer entry, when summers are excluded
    pub fn matches(&self, record: &Record) -> bool {
        if record.courseno != self.courseno {
            return false;
        }
        if record.section.contains(QATAR_SECTION) || record.section.contains(LEGACY_SECTION) {
            return false;
        }
        if record.rating.is_empty() {
            return false;
        }
        !(self.exclude_summer && record.semester == SUMMER)
    }

    /// Keep the matching records, in input order.
    pub fn apply<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}
