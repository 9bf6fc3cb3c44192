// src/pipeline/export.rs

//! Collection export pipeline.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::error::Result;
use crate::models::{CollectionKind, Config};
use crate::services::{CollectionCrawler, PageFetcher, Throttle};
use crate::storage::GoodreadsCsv;

/// Counts and location of a finished export.
#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub path: PathBuf,
    /// Rows written to the CSV
    pub rows: usize,
    /// Retained items per collection, in export order
    pub collections: Vec<(CollectionKind, usize)>,
    /// Listing entries visited
    pub seen: usize,
    /// Entries skipped for a missing rating or ISBN
    pub dropped: usize,
}

/// Run the export with today's local date.
pub async fn run_export(
    config: Arc<Config>,
    fetcher: Arc<dyn PageFetcher>,
    throttle: Arc<dyn Throttle>,
) -> Result<ExportSummary> {
    run_export_at(config, fetcher, throttle, Local::now().date_naive()).await
}

/// Run the export, using `today` for date fallbacks.
pub async fn run_export_at(
    config: Arc<Config>,
    fetcher: Arc<dyn PageFetcher>,
    throttle: Arc<dyn Throttle>,
    today: NaiveDate,
) -> Result<ExportSummary> {
    config.validate()?;

    let kinds = config.export.collections.clone();
    let output = PathBuf::from(&config.export.output);
    let writer = GoodreadsCsv::new(config.export.extra_columns);

    log::info!(
        "Exporting {} for '{}' ({} profile)",
        kinds
            .iter()
            .map(|k| k.label())
            .collect::<Vec<_>>()
            .join(", "),
        config.account.username,
        config.export.profile
    );

    let crawler = CollectionCrawler::new(config, fetcher, throttle)?.with_today(today);
    let outcome = crawler.fetch_all(&kinds).await?;

    let written = writer.write_file(Path::new(&output), &outcome.items)?;
    log::info!(
        "Scraping finished ! {} items saved in {}",
        written.rows,
        written.path.display()
    );
    if outcome.dropped > 0 {
        log::info!(
            "{} of {} entries skipped (no rating or no ISBN)",
            outcome.dropped,
            outcome.seen
        );
    }

    Ok(ExportSummary {
        path: written.path,
        rows: written.rows,
        collections: outcome.collections,
        seen: outcome.seen,
        dropped: outcome.dropped,
    })
}
