//! Page fetching.

use async_trait::async_trait;
use scraper::Html;

use crate::error::Result;
use crate::models::Config;
use crate::utils::http;

/// Source of catalog pages.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the raw body of `url`.
    async fn fetch_text(&self, url: &str) -> Result<String>;

    /// Fetch `url` and parse it as an HTML document.
    async fn fetch_document(&self, url: &str) -> Result<Html> {
        let text = self.fetch_text(url).await?;
        Ok(Html::parse_document(&text))
    }
}

/// Authenticated HTTP fetcher.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher from the crawler and account settings.
    pub fn new(config: &Config) -> Result<Self> {
        let client = http::create_client(&config.crawler, &config.account)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        log::debug!("GET {url}");
        http::fetch_text(&self.client, url).await
    }
}
