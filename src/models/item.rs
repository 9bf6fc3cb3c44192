//! Collection item records.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{CollectionKind, DateAddedRule, DateReadFallback, ItemPolicy};
use crate::utils::isbn::IsbnLiterals;

/// Shelf written for every exported item.
pub const EXCLUSIVE_SHELF: &str = "read";

/// One product link found on a listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingEntry {
    pub title: String,

    /// Item page, carrying the user's rating and read date
    pub base_url: String,

    /// Bibliographic view of the item
    pub detail_url: String,
}

/// Rating and read date taken from an item page.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReadingStatus {
    /// Rating on the 0-5 half-integer scale
    pub rating: Option<f64>,
    pub date_read: Option<NaiveDate>,
}

/// Bibliographic fields taken from an item's details page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Bibliography {
    pub author: Option<String>,
    pub publisher: Option<String>,
    pub isbn: Option<IsbnLiterals>,
    pub year_published: Option<String>,
    pub original_language: Option<String>,
    pub summary: Option<String>,
}

/// Why an item was left out of the export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    MissingRating,
    MissingIsbn,
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropReason::MissingRating => f.write_str("no rating"),
            DropReason::MissingIsbn => f.write_str("no ISBN"),
        }
    }
}

/// A fully assembled record, ready for the CSV writer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionItem {
    pub collection: CollectionKind,
    pub title: String,
    pub author: String,
    /// Same value as `author`; the site offers no last-first form
    pub author_lf: String,
    pub publisher: String,
    pub isbn: IsbnLiterals,
    pub year_published: String,
    pub original_language: String,
    pub summary: String,
    pub my_rating: f64,
    pub date_read: Option<NaiveDate>,
    pub date_added: NaiveDate,
    pub exclusive_shelf: String,
    pub read_count: u32,
    pub owned_copies: u32,
}

impl CollectionItem {
    /// Combine the parsed pages of one item under `policy`.
    ///
    /// Items without a rating or without an ISBN are rejected whole.
    pub fn assemble(
        collection: CollectionKind,
        entry: ListingEntry,
        status: ReadingStatus,
        bibliography: Bibliography,
        policy: &ItemPolicy,
        today: NaiveDate,
    ) -> Result<Self, DropReason> {
        let my_rating = status.rating.ok_or(DropReason::MissingRating)?;
        let isbn = bibliography.isbn.ok_or(DropReason::MissingIsbn)?;

        let date_read = match (status.date_read, policy.date_read_fallback) {
            (Some(date), _) => Some(date),
            (None, DateReadFallback::Empty) => None,
            (None, DateReadFallback::Today) => Some(today),
        };
        let date_added = match policy.date_added {
            DateAddedRule::DateReadOrToday => date_read.unwrap_or(today),
            DateAddedRule::Today => today,
        };
        let author = bibliography.author.unwrap_or_default();

        Ok(Self {
            collection,
            title: entry.title,
            author_lf: author.clone(),
            author,
            publisher: bibliography.publisher.unwrap_or_default(),
            isbn,
            year_published: bibliography.year_published.unwrap_or_default(),
            original_language: bibliography.original_language.unwrap_or_default(),
            summary: bibliography.summary.unwrap_or_default(),
            my_rating,
            date_read,
            date_added,
            exclusive_shelf: EXCLUSIVE_SHELF.to_string(),
            read_count: policy.read_count,
            owned_copies: policy.owned_copies,
        })
    }
}
