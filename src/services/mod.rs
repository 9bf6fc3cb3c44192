//! Service layer for the exporter.
//!
//! This module contains the business logic for:
//! - Page fetching (`PageFetcher`, `HttpFetcher`)
//! - Listing and pagination parsing
//! - Item page parsing (`ItemPageParser`, `BibliographyParser`)
//! - Request pacing (`Throttle`)
//! - Collection crawling (`CollectionCrawler`)

pub mod bibliography;
mod collection;
mod fetcher;
pub mod item_page;
pub mod listing;
pub mod pagination;
mod selectors;
pub mod throttle;

pub use bibliography::BibliographyParser;
pub use collection::{CollectionCrawler, CollectionOutcome, CrawlOutcome};
pub use fetcher::{HttpFetcher, PageFetcher};
pub use item_page::ItemPageParser;
pub use selectors::{CompiledSelectors, parse_selector};
pub use throttle::{FixedDelay, NoDelay, Throttle};
