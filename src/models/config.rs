//! Application configuration structures.

use std::fs;
use std::path::Path;

use scraper::Selector;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::{CollectionKind, ItemPolicy, LabelVocabulary, ProfilePreset, SiteSelectors};
use crate::utils::dates::DateLocale;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Account owning the collection
    #[serde(default)]
    pub account: AccountConfig,

    /// HTTP behavior settings
    #[serde(default)]
    pub crawler: CrawlerConfig,

    /// What to export and where
    #[serde(default)]
    pub export: ExportConfig,

    /// Explicit item policy, overrides `export.profile` when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<ItemPolicy>,

    /// CSS selectors for the catalog pages
    #[serde(default)]
    pub selectors: SiteSelectors,

    /// Label texts matched on item pages
    #[serde(default)]
    pub labels: LabelVocabulary,

    /// Month names used to parse read dates
    #[serde(default)]
    pub dates: DateLocale,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// The item policy in effect: the explicit `[policy]` table, or the preset.
    pub fn item_policy(&self) -> ItemPolicy {
        self.policy
            .clone()
            .unwrap_or_else(|| self.export.profile.policy())
    }

    /// Select a profile preset, replacing any explicit `[policy]` table.
    pub fn set_profile(&mut self, profile: ProfilePreset) {
        if self.policy.take().is_some() {
            log::warn!("Profile '{profile}' replaces the [policy] table from the config file");
        }
        self.export.profile = profile;
    }

    /// Validate configuration values before any network activity.
    pub fn validate(&self) -> Result<()> {
        if self.account.username.trim().is_empty() {
            return Err(AppError::validation("account.username is mandatory"));
        }
        if self.account.auth_cookie.trim().is_empty() {
            return Err(AppError::validation("account.auth_cookie is mandatory"));
        }
        if self.crawler.user_agent.trim().is_empty() {
            return Err(AppError::validation("crawler.user_agent is empty"));
        }
        if self.crawler.cookie_name.trim().is_empty() {
            return Err(AppError::validation("crawler.cookie_name is empty"));
        }
        if self.crawler.timeout_secs == 0 {
            return Err(AppError::validation("crawler.timeout_secs must be > 0"));
        }
        url::Url::parse(&self.crawler.base_url)?;
        if self.export.collections.is_empty() {
            return Err(AppError::validation("export.collections is empty"));
        }
        if self.export.output.trim().is_empty() {
            return Err(AppError::validation("export.output is empty"));
        }
        if self.dates.months.len() != 12 {
            return Err(AppError::validation(format!(
                "dates.months must list 12 months, got {}",
                self.dates.months.len()
            )));
        }
        if self.labels.rating_marker.trim().is_empty() {
            return Err(AppError::validation("labels.rating_marker is empty"));
        }
        if self.labels.read_date_prefixes.is_empty()
            || self.labels.read_date_prefixes.iter().any(|p| p.trim().is_empty())
        {
            return Err(AppError::validation(
                "labels.read_date_prefixes must list non-empty prefixes",
            ));
        }
        for selector in self.selectors.all() {
            Selector::parse(selector).map_err(|e| AppError::selector(selector, format!("{e:?}")))?;
        }
        Ok(())
    }
}

/// Account owning the exported collection.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AccountConfig {
    /// Public username, as it appears in collection URLs
    #[serde(default)]
    pub username: String,

    /// Value of the session authentication cookie
    #[serde(default)]
    pub auth_cookie: String,
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// Catalog site root
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Name of the session cookie carrying `account.auth_cookie`
    #[serde(default = "defaults::cookie_name")]
    pub cookie_name: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Pause after each retained item, in milliseconds
    #[serde(default = "defaults::request_delay")]
    pub request_delay_ms: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            user_agent: defaults::user_agent(),
            cookie_name: defaults::cookie_name(),
            timeout_secs: defaults::timeout(),
            request_delay_ms: defaults::request_delay(),
        }
    }
}

/// Export selection and output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Collection types to pull, in output order
    #[serde(default = "defaults::collections")]
    pub collections: Vec<CollectionKind>,

    /// Output CSV path
    #[serde(default = "defaults::output")]
    pub output: String,

    /// Append `Original Language` and `Summary` after the Goodreads columns
    #[serde(default)]
    pub extra_columns: bool,

    /// Named item policy preset
    #[serde(default)]
    pub profile: ProfilePreset,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            collections: defaults::collections(),
            output: defaults::output(),
            extra_columns: false,
            profile: ProfilePreset::default(),
        }
    }
}

mod defaults {
    use super::CollectionKind;

    pub fn base_url() -> String {
        "https://www.senscritique.com".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/115.0 Safari/537.36".into()
    }
    pub fn cookie_name() -> String {
        "SC_AUTH".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn request_delay() -> u64 {
        800
    }
    pub fn collections() -> Vec<CollectionKind> {
        vec![CollectionKind::Comics, CollectionKind::Books]
    }
    pub fn output() -> String {
        "senscritique_collection.csv".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FetchOrder;

    fn valid_config() -> Config {
        let mut config = Config::default();
        config.account.username = "reader".to_string();
        config.account.auth_cookie = "token".to_string();
        config
    }

    #[test]
    fn validate_requires_credentials() {
        let config = Config::default();
        assert!(matches!(config.validate(), Err(AppError::Validation(_))));

        let mut config = valid_config();
        config.account.auth_cookie = "   ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_accepts_credentials_with_defaults() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn validate_rejects_short_month_table() {
        let mut config = valid_config();
        config.dates.months.truncate(11);
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_blank_read_date_prefix() {
        let mut config = valid_config();
        config.labels.read_date_prefixes.push(String::new());
        assert!(matches!(config.validate(), Err(AppError::Validation(_))));

        let mut config = valid_config();
        config.labels.read_date_prefixes.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_output() {
        let mut config = valid_config();
        config.export.output = " ".to_string();
        assert!(matches!(config.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn validate_rejects_bad_selector() {
        let mut config = valid_config();
        config.selectors.product_link = "[[invalid".to_string();
        assert!(matches!(config.validate(), Err(AppError::Selector { .. })));
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [account]
            username = "reader"
            auth_cookie = "abc"

            [export]
            collections = ["books"]
            profile = "details-first"
            "#,
        )
        .unwrap();

        assert_eq!(config.export.collections, vec![CollectionKind::Books]);
        assert_eq!(config.crawler.cookie_name, "SC_AUTH");
        assert_eq!(config.crawler.request_delay_ms, 800);
        assert_eq!(config.item_policy().fetch_order, FetchOrder::DetailsFirst);
        assert_eq!(config.dates.months.len(), 12);
    }

    #[test]
    fn explicit_policy_overrides_preset() {
        let config: Config = toml::from_str(
            r#"
            [policy]
            fetch_order = "details-first"
            owned_copies = 3
            "#,
        )
        .unwrap();

        let policy = config.item_policy();
        assert_eq!(policy.fetch_order, FetchOrder::DetailsFirst);
        assert_eq!(policy.owned_copies, 3);
        assert_eq!(policy.read_count, 1);
    }

    #[test]
    fn set_profile_replaces_explicit_policy() {
        let mut config: Config = toml::from_str(
            r#"
            [policy]
            fetch_order = "rating-first"
            owned_copies = 3
            "#,
        )
        .unwrap();

        config.set_profile(ProfilePreset::DetailsFirst);

        assert!(config.policy.is_none());
        assert_eq!(config.item_policy(), ProfilePreset::DetailsFirst.policy());
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.export.output, "senscritique_collection.csv");
    }
}
