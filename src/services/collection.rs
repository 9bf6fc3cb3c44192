// src/services/collection.rs

//! Collection crawler service.
//!
//! Walks the listing pages of each requested collection, fetches both pages
//! of every item, and keeps the items that carry a rating and an ISBN.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use scraper::Html;
use url::Url;

use crate::error::Result;
use crate::models::{
    Bibliography, CollectionItem, CollectionKind, Config, FetchOrder, ItemPolicy, ListingEntry,
    ReadingStatus,
};
use crate::services::listing::{listing_url, parse_listing};
use crate::services::pagination::total_pages;
use crate::services::{
    BibliographyParser, CompiledSelectors, ItemPageParser, PageFetcher, Throttle,
};

/// Result of crawling one collection.
#[derive(Debug)]
pub struct CollectionOutcome {
    pub kind: CollectionKind,
    pub items: Vec<CollectionItem>,
    pub pages: u32,
    pub seen: usize,
    pub dropped: usize,
}

/// Summary of a crawl over several collections.
#[derive(Debug, Default)]
pub struct CrawlOutcome {
    /// Items of every collection, in request order
    pub items: Vec<CollectionItem>,
    pub collections: Vec<(CollectionKind, usize)>,
    pub seen: usize,
    pub dropped: usize,
}

/// Service crawling a user's collections.
pub struct CollectionCrawler {
    config: Arc<Config>,
    fetcher: Arc<dyn PageFetcher>,
    throttle: Arc<dyn Throttle>,
    selectors: CompiledSelectors,
    item_page: ItemPageParser,
    bibliography: BibliographyParser,
    policy: ItemPolicy,
    base_url: Url,
    today: NaiveDate,
}

impl CollectionCrawler {
    /// Create a crawler; fails on invalid selectors or base URL.
    pub fn new(
        config: Arc<Config>,
        fetcher: Arc<dyn PageFetcher>,
        throttle: Arc<dyn Throttle>,
    ) -> Result<Self> {
        let selectors = CompiledSelectors::compile(&config.selectors)?;
        let item_page = ItemPageParser::new(
            selectors.clone(),
            config.labels.clone(),
            config.dates.clone(),
        );
        let bibliography = BibliographyParser::new(selectors.clone(), &config.labels);
        let base_url = Url::parse(&config.crawler.base_url)?;
        let policy = config.item_policy();

        Ok(Self {
            config,
            fetcher,
            throttle,
            selectors,
            item_page,
            bibliography,
            policy,
            base_url,
            today: Local::now().date_naive(),
        })
    }

    /// Use a fixed date for "today" instead of the local clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Crawl each collection in turn and concatenate the results.
    pub async fn fetch_all(&self, kinds: &[CollectionKind]) -> Result<CrawlOutcome> {
        let mut outcome = CrawlOutcome::default();

        for &kind in kinds {
            log::info!("Begin for {}", kind.label());
            let collection = self.fetch_collection(kind).await?;
            log::info!(
                "End for {} - {} retrieved, {} dropped",
                kind.label(),
                collection.items.len(),
                collection.dropped
            );

            outcome.seen += collection.seen;
            outcome.dropped += collection.dropped;
            outcome.collections.push((kind, collection.items.len()));
            outcome.items.extend(collection.items);
        }

        Ok(outcome)
    }

    /// Crawl every listing page of one collection.
    pub async fn fetch_collection(&self, kind: CollectionKind) -> Result<CollectionOutcome> {
        let (first_entries, pages) = {
            let document = self.fetch_listing(kind, 1).await?;
            (
                parse_listing(&document, &self.selectors, &self.base_url),
                total_pages(&document, &self.selectors),
            )
        };
        log::info!("Detected page number : {pages}");

        let mut outcome = CollectionOutcome {
            kind,
            items: Vec::new(),
            pages,
            seen: 0,
            dropped: 0,
        };

        let mut entries = first_entries;
        for page in 1..=pages {
            if page > 1 {
                let document = self.fetch_listing(kind, page).await?;
                entries = parse_listing(&document, &self.selectors, &self.base_url);
            }
            log::info!("Scraping page {page}/{pages}");

            for entry in std::mem::take(&mut entries) {
                outcome.seen += 1;
                match self.fetch_item(kind, entry).await? {
                    Some(item) => {
                        outcome.items.push(item);
                        self.throttle.pause().await;
                    }
                    None => outcome.dropped += 1,
                }
            }
        }

        Ok(outcome)
    }

    /// Fetch both pages of one item and assemble it, or `None` if it is dropped.
    async fn fetch_item(
        &self,
        kind: CollectionKind,
        entry: ListingEntry,
    ) -> Result<Option<CollectionItem>> {
        let (status, bibliography) = match self.policy.fetch_order {
            FetchOrder::RatingFirst => {
                let status = self.fetch_status(&entry.base_url).await?;
                let bibliography = self.fetch_bibliography(&entry.detail_url).await?;
                (status, bibliography)
            }
            FetchOrder::DetailsFirst => {
                let bibliography = self.fetch_bibliography(&entry.detail_url).await?;
                let status = self.fetch_status(&entry.base_url).await?;
                (status, bibliography)
            }
        };

        let title = entry.title.clone();
        match CollectionItem::assemble(kind, entry, status, bibliography, &self.policy, self.today)
        {
            Ok(item) => {
                if log::log_enabled!(log::Level::Debug) {
                    log::debug!("Item retrieved : {}", serde_json::to_string(&item)?);
                }
                Ok(Some(item))
            }
            Err(reason) => {
                log::info!("Skipping '{title}': {reason}");
                Ok(None)
            }
        }
    }

    async fn fetch_listing(&self, kind: CollectionKind, page: u32) -> Result<Html> {
        let url = listing_url(
            &self.base_url,
            &self.config.account.username,
            kind.universe_id(),
            page,
        )?;
        self.fetcher.fetch_document(url.as_str()).await
    }

    async fn fetch_status(&self, url: &str) -> Result<ReadingStatus> {
        let document = self.fetcher.fetch_document(url).await?;
        Ok(self.item_page.parse(&document))
    }

    async fn fetch_bibliography(&self, url: &str) -> Result<Bibliography> {
        let document = self.fetcher.fetch_document(url).await?;
        Ok(self.bibliography.parse(&document))
    }
}
