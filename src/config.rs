// src/config.rs

//! Configuration loading utilities.
//!
//! Loads the TOML file, layers environment overrides on top and writes the
//! starter template used by `sc-export init`.

use std::fs;
use std::path::Path;

use crate::error::{AppError, Result};
use crate::models::Config;

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "sc-export.toml";

/// Environment variable overriding `account.username`.
pub const ENV_USERNAME: &str = "SC_EXPORT_USERNAME";

/// Environment variable overriding `account.auth_cookie`.
pub const ENV_AUTH_COOKIE: &str = "SC_EXPORT_AUTH_COOKIE";

/// Load configuration.
///
/// An explicitly given file must load. Without one, the default file is
/// read if present and defaults are used otherwise.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => {
            let config = Config::load(path)?;
            log::info!("Loaded configuration from {}", path.display());
            Ok(config)
        }
        None => Ok(Config::load_or_default(DEFAULT_CONFIG_FILE)),
    }
}

/// Apply `SC_EXPORT_*` environment overrides.
pub fn apply_env_overrides(config: &mut Config) {
    apply_overrides_from(config, |key| std::env::var(key).ok());
}

/// Apply overrides from an arbitrary lookup; empty values are ignored.
pub fn apply_overrides_from(config: &mut Config, lookup: impl Fn(&str) -> Option<String>) {
    let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(username) = value(ENV_USERNAME) {
        log::debug!("Username taken from {ENV_USERNAME}");
        config.account.username = username;
    }
    if let Some(cookie) = value(ENV_AUTH_COOKIE) {
        log::debug!("Auth cookie taken from {ENV_AUTH_COOKIE}");
        config.account.auth_cookie = cookie;
    }
}

/// Write the default configuration to `path`.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn write_template(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(AppError::config(format!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        )));
    }

    let text = toml::to_string_pretty(&Config::default())?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_overrides_replace_account_fields() {
        let env: HashMap<&str, &str> = [(ENV_USERNAME, "reader"), (ENV_AUTH_COOKIE, "secret")]
            .into_iter()
            .collect();
        let mut config = Config::default();

        apply_overrides_from(&mut config, |k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config.account.username, "reader");
        assert_eq!(config.account.auth_cookie, "secret");
    }

    #[test]
    fn test_blank_override_keeps_file_value() {
        let mut config = Config::default();
        config.account.username = "from-file".to_string();

        apply_overrides_from(&mut config, |k| {
            (k == ENV_USERNAME).then(|| "  ".to_string())
        });

        assert_eq!(config.account.username, "from-file");
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        assert!(load_config(Some(&tmp.path().join("missing.toml"))).is_err());
    }

    #[test]
    fn test_template_loads_back_and_is_not_overwritten() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("sc-export.toml");

        write_template(&path, false).unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.crawler.cookie_name, "SC_AUTH");

        assert!(matches!(
            write_template(&path, false),
            Err(AppError::Config(_))
        ));
        assert!(write_template(&path, true).is_ok());
    }
}
