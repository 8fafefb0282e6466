//! Source loading: turn CSV exports on disk into records.
//!
//! This module handles the first stage of the pipeline - finding the FCE
//! export files and splitting them into [`Record`](crate::Record)s. It
//! provides:
//!
//! - **Configuration**: where the exports live and which files to read
//! - **Loading**: line splitting, blank-line skipping and row validation
//!
//! ## Example
//!
//! ```rust,ignore
//! use fcelib::source::{load_records, LoaderConfig};
//!
//! let config = LoaderConfig::from_working_dir(std::env::current_dir()?);
//! let records = load_records(&config)?;
//! ```

pub mod loader;

pub use loader::{discover_files, load_records, read_records, LoaderConfig};
