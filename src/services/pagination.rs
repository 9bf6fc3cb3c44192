//! Page-count detection on listing pages.

use scraper::Html;

use crate::services::CompiledSelectors;
use crate::utils::element_text;

/// Number of listing pages announced by the pagination control.
///
/// A page without pagination, or whose last page control is not a number,
/// counts as a single page.
pub fn total_pages(document: &Html, selectors: &CompiledSelectors) -> u32 {
    let Some(nav) = document.select(&selectors.pagination_nav).next() else {
        return 1;
    };
    let Some(last) = nav.select(&selectors.pagination_item).last() else {
        return 1;
    };

    let text = element_text(&last);
    match text.parse::<u32>() {
        Ok(0) | Err(_) => {
            log::debug!("Pagination control '{text}' is not a page count, assuming 1 page");
            1
        }
        Ok(pages) => pages,
    }
}
