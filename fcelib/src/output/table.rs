//! Info table for FCE entries.
//!
//! This module provides `InfoTable`, a presentation-ready table of entries
//! that can be rendered as aligned text or serialized to JSON.
//!
//! Every column is as wide as its header plus [`PADDING`], except the
//! instructor column, which is exactly as wide as its longest value. Cells
//! are centered and joined by a single space.

use serde::Serialize;

use crate::record::Record;

/// Column headers, in display order.
pub const HEADERS: [&str; 5] = ["SEMESTER", "YEAR", "INSTRUCTOR", "HRS/WK", "RATING"];

/// Extra width added to every header-sized column.
pub const PADDING: usize = 2;

const INSTRUCTOR_COLUMN: usize = 2;

/// Table-ready FCE entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoTable {
    /// Column headers
    pub headers: Vec<String>,
    /// One row of trimmed cell values per entry
    pub rows: Vec<Vec<String>>,
    /// Column widths, in characters
    pub widths: Vec<usize>,
}

impl InfoTable {
    /// Create an InfoTable from records, one row each, in the given order.
    pub fn from_records(records: &[&Record]) -> Self {
        let headers: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
        let rows: Vec<Vec<String>> = records
            .iter()
            .map(|r| {
                r.display_fields()
                    .iter()
                    .map(|f| f.trim_matches(' ').to_string())
                    .collect()
            })
            .collect();

        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count() + PADDING).collect();
        widths[INSTRUCTOR_COLUMN] = std::iter::once(&headers)
            .chain(rows.iter())
            .map(|row| row[INSTRUCTOR_COLUMN].chars().count())
            .max()
            .unwrap_or(0);

        InfoTable {
            headers,
            rows,
            widths,
        }
    }

    /// Render the header and every row, one line each.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in std::iter::once(&self.headers).chain(self.rows.iter()) {
            out.push_str(&self.render_row(row));
            out.push('\n');
        }
        out
    }

    fn render_row(&self, cells: &[String]) -> String {
        cells
            .iter()
            .zip(&self.widths)
            .map(|(cell, &width)| format!("{:^width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
