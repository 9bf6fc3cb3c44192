// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use reqwest::header::{COOKIE, HeaderMap, HeaderValue};

use crate::error::{AppError, Result};
use crate::models::{AccountConfig, CrawlerConfig};

/// Create an HTTP client that sends the user agent and session cookie on every request.
pub fn create_client(config: &CrawlerConfig, account: &AccountConfig) -> Result<reqwest::Client> {
    let cookie = format!("{}={}", config.cookie_name, account.auth_cookie);
    let mut headers = HeaderMap::new();
    headers.insert(
        COOKIE,
        HeaderValue::from_str(&cookie)
            .map_err(|e| AppError::config(format!("Invalid auth cookie: {e}")))?,
    );

    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .default_headers(headers)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// Fetch a page body, failing on any non-2xx status.
pub async fn fetch_text(client: &reqwest::Client, url: &str) -> Result<String> {
    let response = client.get(url).send().await?.error_for_status()?;
    Ok(response.text().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_cookie_with_newline() {
        let account = AccountConfig {
            username: "reader".to_string(),
            auth_cookie: "abc\ndef".to_string(),
        };
        let result = create_client(&CrawlerConfig::default(), &account);
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
