// src/models/mod.rs

//! Domain models for the exporter.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod collection;
mod config;
mod item;
mod labels;
mod policy;
mod selectors;

// Re-export all public types
pub use collection::CollectionKind;
pub use config::{AccountConfig, Config, CrawlerConfig, ExportConfig};
pub use item::{
    Bibliography, CollectionItem, DropReason, EXCLUSIVE_SHELF, ListingEntry, ReadingStatus,
};
pub use labels::LabelVocabulary;
pub use policy::{DateAddedRule, DateReadFallback, FetchOrder, ItemPolicy, ProfilePreset};
pub use selectors::SiteSelectors;
