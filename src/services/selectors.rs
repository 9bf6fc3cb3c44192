//! Compiled CSS selectors.
//!
//! Selector strings live in configuration; they are parsed once here and
//! shared by the page parsers.

use scraper::Selector;

use crate::error::{AppError, Result};
use crate::models::SiteSelectors;

/// Parsed form of [`SiteSelectors`].
#[derive(Debug, Clone)]
pub struct CompiledSelectors {
    pub product_link: Selector,
    pub link_attr: String,
    pub details_path: String,
    pub pagination_nav: Selector,
    pub pagination_item: Selector,
    pub info_block: Selector,
    pub summary: Selector,
    pub label_paragraph: Selector,
}

impl CompiledSelectors {
    pub fn compile(selectors: &SiteSelectors) -> Result<Self> {
        Ok(Self {
            product_link: parse_selector(&selectors.product_link)?,
            link_attr: selectors.link_attr.clone(),
            details_path: selectors.details_path.clone(),
            pagination_nav: parse_selector(&selectors.pagination_nav)?,
            pagination_item: parse_selector(&selectors.pagination_item)?,
            info_block: parse_selector(&selectors.info_block)?,
            summary: parse_selector(&selectors.summary)?,
            label_paragraph: parse_selector(&selectors.label_paragraph)?,
        })
    }
}

impl Default for CompiledSelectors {
    fn default() -> Self {
        Self::compile(&SiteSelectors::default()).expect("default selectors are valid")
    }
}

/// Parse a CSS selector, mapping failures to [`AppError::Selector`].
pub fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selector_valid() {
        assert!(parse_selector("div.class").is_ok());
        assert!(parse_selector(r#"a[data-testid="product-title"]"#).is_ok());
    }

    #[test]
    fn test_parse_selector_invalid() {
        assert!(parse_selector("[[invalid").is_err());
    }

    #[test]
    fn test_default_selectors_compile() {
        assert!(CompiledSelectors::compile(&SiteSelectors::default()).is_ok());
    }

    #[test]
    fn test_compile_reports_bad_selector() {
        let selectors = SiteSelectors {
            info_block: "div[".to_string(),
            ..SiteSelectors::default()
        };
        let err = CompiledSelectors::compile(&selectors).unwrap_err();
        assert!(matches!(err, AppError::Selector { selector, .. } if selector == "div["));
    }
}
