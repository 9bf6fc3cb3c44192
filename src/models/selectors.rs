// src/models/selectors.rs

//! CSS selectors for scraping the catalog pages.

use serde::{Deserialize, Serialize};

/// CSS selectors for the listing and item pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSelectors {
    /// Selector for each product link on a listing page
    #[serde(default = "defaults::product_link")]
    pub product_link: String,

    /// HTML attribute holding the item link (usually "href")
    #[serde(default = "defaults::link_attr")]
    pub link_attr: String,

    /// Path appended to an item URL to reach its bibliographic view
    #[serde(default = "defaults::details_path")]
    pub details_path: String,

    /// Selector for the pagination navigation region
    #[serde(default = "defaults::pagination_nav")]
    pub pagination_nav: String,

    /// Selector for page-number controls inside the pagination region
    #[serde(default = "defaults::pagination_item")]
    pub pagination_item: String,

    /// Selector for the block holding label/value spans on the details page
    #[serde(default = "defaults::info_block")]
    pub info_block: String,

    /// Selector for the synopsis paragraph
    #[serde(default = "defaults::summary")]
    pub summary: String,

    /// Selector for label paragraphs on the item page (rating, read date)
    #[serde(default = "defaults::label_paragraph")]
    pub label_paragraph: String,
}

impl Default for SiteSelectors {
    fn default() -> Self {
        Self {
            product_link: defaults::product_link(),
            link_attr: defaults::link_attr(),
            details_path: defaults::details_path(),
            pagination_nav: defaults::pagination_nav(),
            pagination_item: defaults::pagination_item(),
            info_block: defaults::info_block(),
            summary: defaults::summary(),
            label_paragraph: defaults::label_paragraph(),
        }
    }
}

impl SiteSelectors {
    /// Every CSS selector string, for validation.
    pub fn all(&self) -> [&str; 6] {
        [
            &self.product_link,
            &self.pagination_nav,
            &self.pagination_item,
            &self.info_block,
            &self.summary,
            &self.label_paragraph,
        ]
    }
}

mod defaults {
    pub fn product_link() -> String {
        r#"a[data-testid="product-title"]"#.into()
    }
    pub fn link_attr() -> String {
        "href".into()
    }
    pub fn details_path() -> String {
        "/details".into()
    }
    pub fn pagination_nav() -> String {
        r#"nav[aria-label="Navigation de la pagination"]"#.into()
    }
    pub fn pagination_item() -> String {
        "span".into()
    }
    pub fn info_block() -> String {
        r#"div[type="default"]"#.into()
    }
    pub fn summary() -> String {
        r#"p[data-testid="content"]"#.into()
    }
    pub fn label_paragraph() -> String {
        "p".into()
    }
}
