//! Output formatting: present summaries and entries as text.
//!
//! This module handles the final stage of the pipeline - formatting query
//! results for display. It provides:
//!
//! - **format_summary**: Course header with average hours and rating
//! - **InfoTable**: Centered, fixed-width table of entries
//!
//! Nothing here filters or computes statistics; that happens in the query
//! stage.
//!
//! ## Example
//!
//! ```rust,ignore
//! use fcelib::output::{format_summary, InfoTable};
//!
//! print!("{}", format_summary(&summary));
//! print!("{}", InfoTable::from_records(&summary.records).render());
//! ```

pub mod summary;
pub mod table;

pub use summary::{format_summary, round_tenth};
pub use table::{InfoTable, HEADERS, PADDING};
