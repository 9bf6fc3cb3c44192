//! Listing page parsing.

use scraper::Html;
use url::Url;

use crate::error::{AppError, Result};
use crate::models::ListingEntry;
use crate::services::CompiledSelectors;
use crate::utils::{element_text, resolve_url};

/// Extract one entry per product link, in page order.
///
/// Links without a usable target are skipped.
pub fn parse_listing(
    document: &Html,
    selectors: &CompiledSelectors,
    base_url: &Url,
) -> Vec<ListingEntry> {
    let mut entries = Vec::new();

    for link in document.select(&selectors.product_link) {
        let title = element_text(&link);
        let href = link.value().attr(&selectors.link_attr).unwrap_or("").trim();
        if href.is_empty() {
            log::debug!("Skipping '{title}': no link");
            continue;
        }

        let item_url = resolve_url(base_url, href).trim_end_matches('/').to_string();
        let detail_url = format!("{item_url}{}", selectors.details_path);

        entries.push(ListingEntry {
            title,
            base_url: item_url,
            detail_url,
        });
    }

    entries
}

/// URL of one listing page of a user's collection.
///
/// Segments are appended to the base path, so a base like `https://host/fr`
/// keeps its prefix. The username is percent-encoded as a single segment.
pub fn listing_url(base_url: &Url, username: &str, universe: u32, page: u32) -> Result<Url> {
    let mut url = base_url.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|_| AppError::config(format!("{base_url} cannot be used as a base URL")))?
        .pop_if_empty()
        .push(username)
        .push("collection");
    url.query_pairs_mut()
        .append_pair("universe", &universe.to_string())
        .append_pair("page", &page.to_string());
    Ok(url)
}
