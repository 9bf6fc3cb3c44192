//! Pipeline entry points for exporter operations.
//!
//! - `run_export`: Crawl the configured collections and write the CSV
//! - `run_validate`: Check the configuration without touching the network

pub mod export;
pub mod validate;

pub use export::{ExportSummary, run_export, run_export_at};
pub use validate::run_validate;
