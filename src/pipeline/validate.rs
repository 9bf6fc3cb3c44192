// src/pipeline/validate.rs

use crate::error::Result;
use crate::models::Config;

/// Validate the configuration and log its effective values.
pub fn run_validate(config: &Config) -> Result<()> {
    log::info!("Validating configuration...");

    if let Err(e) = config.validate() {
        log::error!("Config validation failed: {e}");
        return Err(e);
    }

    let policy = config.item_policy();
    log::info!("✓ Config OK");
    log::info!("  - Account: {}", config.account.username);
    log::info!("  - Site: {}", config.crawler.base_url);
    log::info!(
        "  - Collections: {}",
        config
            .export
            .collections
            .iter()
            .map(|k| k.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    log::info!("  - Output: {}", config.export.output);
    log::info!(
        "  - Policy: {:?} fetch, {} read, {} owned",
        policy.fetch_order,
        policy.read_count,
        policy.owned_copies
    );
    log::info!("  - Request delay: {} ms", config.crawler.request_delay_ms);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_reports_missing_credentials() {
        assert!(run_validate(&Config::default()).is_err());
    }

    #[test]
    fn test_validate_accepts_complete_config() {
        let mut config = Config::default();
        config.account.username = "reader".to_string();
        config.account.auth_cookie = "token".to_string();
        assert!(run_validate(&config).is_ok());
    }
}
