//! Output of exported collections.
//!
//! A run writes one CSV file in the Goodreads library import layout.

pub mod goodreads;

use std::path::PathBuf;

// Re-export for convenience
pub use goodreads::{EXTRA_COLUMNS, GOODREADS_COLUMNS, GoodreadsCsv};

/// Metadata about a finished write.
#[derive(Debug, Clone)]
pub struct WriteSummary {
    pub path: PathBuf,
    /// Data rows written, header excluded
    pub rows: usize,
}
