//! Goodreads-compatible CSV output.
//!
//! Import tools match columns by position, so the header is fixed and always
//! complete; columns the catalog cannot fill stay empty.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::CollectionItem;
use crate::storage::WriteSummary;
use crate::utils::dates::format_date;

/// Goodreads library export columns, in import order.
pub const GOODREADS_COLUMNS: [&str; 24] = [
    "Book Id",
    "Title",
    "Author",
    "Author l-f",
    "Additional Authors",
    "ISBN",
    "ISBN13",
    "My Rating",
    "Average Rating",
    "Publisher",
    "Binding",
    "Number of Pages",
    "Year Published",
    "Original Publication Year",
    "Date Read",
    "Date Added",
    "Bookshelves",
    "Bookshelves with positions",
    "Exclusive Shelf",
    "My Review",
    "Spoiler",
    "Private Notes",
    "Read Count",
    "Owned Copies",
];

/// Captured fields with no Goodreads column, appended on request.
pub const EXTRA_COLUMNS: [&str; 2] = ["Original Language", "Summary"];

/// CSV writer for collection items.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoodreadsCsv {
    extra_columns: bool,
}

impl GoodreadsCsv {
    pub fn new(extra_columns: bool) -> Self {
        Self { extra_columns }
    }

    /// Header row.
    pub fn columns(&self) -> Vec<&'static str> {
        let mut columns = GOODREADS_COLUMNS.to_vec();
        if self.extra_columns {
            columns.extend(EXTRA_COLUMNS);
        }
        columns
    }

    /// Write the header and one row per item.
    pub fn write<W: io::Write>(&self, writer: W, items: &[CollectionItem]) -> Result<()> {
        let columns = self.columns();
        let mut wtr = csv::Writer::from_writer(writer);

        wtr.write_record(&columns)?;
        for item in items {
            wtr.write_record(columns.iter().map(|column| cell(item, column)))?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Write to `path`, through a temporary sibling renamed into place.
    pub fn write_file(&self, path: &Path, items: &[CollectionItem]) -> Result<WriteSummary> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp = tmp_path(path);
        let result = fs::File::create(&tmp)
            .map_err(Into::into)
            .and_then(|file| self.write(io::BufWriter::new(file), items))
            .and_then(|()| fs::rename(&tmp, path).map_err(Into::into));
        if let Err(e) = result {
            if let Err(cleanup) = fs::remove_file(&tmp) {
                if cleanup.kind() != io::ErrorKind::NotFound {
                    log::warn!("Could not remove {}: {cleanup}", tmp.display());
                }
            }
            return Err(e);
        }

        Ok(WriteSummary {
            path: path.to_path_buf(),
            rows: items.len(),
        })
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Value of `column` for `item`; empty for columns the catalog does not provide.
fn cell(item: &CollectionItem, column: &str) -> String {
    match column {
        "Title" => item.title.clone(),
        "Author" => item.author.clone(),
        "Author l-f" => item.author_lf.clone(),
        "ISBN" => item.isbn.isbn_literal(),
        "ISBN13" => item.isbn.isbn13_literal(),
        "My Rating" => item.my_rating.to_string(),
        "Publisher" => item.publisher.clone(),
        "Year Published" => item.year_published.clone(),
        "Date Read" => item.date_read.map(format_date).unwrap_or_default(),
        "Date Added" => format_date(item.date_added),
        "Exclusive Shelf" => item.exclusive_shelf.clone(),
        "Read Count" => item.read_count.to_string(),
        "Owned Copies" => item.owned_copies.to_string(),
        "Original Language" => item.original_language.clone(),
        "Summary" => item.summary.clone(),
        _ => String::new(),
    }
}
