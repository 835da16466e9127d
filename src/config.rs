//! Site configuration.
//!
//! Built from defaults, optionally overridden by `RESORT_*` environment
//! variables, then adjusted with the `with_*` builder methods.
//!
//! ```ignore
//! use resort_site::config::SiteConfig;
//!
//! let config = SiteConfig::from_env()?.with_items_per_page(9);
//! ```

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::adapters::DEFAULT_FIRESTORE_URL;
use crate::embed::{EmbedConfig, DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY};
use crate::error::ConfigError;
use crate::pagination::DEFAULT_MAX_VISIBLE_PAGES;

pub const ENV_FIRESTORE_PROJECT: &str = "RESORT_FIRESTORE_PROJECT";
pub const ENV_FIRESTORE_API_KEY: &str = "RESORT_FIRESTORE_API_KEY";
pub const ENV_FIRESTORE_URL: &str = "RESORT_FIRESTORE_URL";
pub const ENV_MAP_EMBED_URL: &str = "RESORT_MAP_EMBED_URL";
pub const ENV_MAP_LINK_URL: &str = "RESORT_MAP_LINK_URL";
pub const ENV_EMBED_MAX_RETRIES: &str = "RESORT_EMBED_MAX_RETRIES";
pub const ENV_EMBED_RETRY_MS: &str = "RESORT_EMBED_RETRY_MS";
pub const ENV_ITEMS_PER_PAGE: &str = "RESORT_ITEMS_PER_PAGE";
pub const ENV_LOG_FILE: &str = "RESORT_LOG_FILE";
pub const ENV_LOG: &str = "RESORT_LOG";

const DEFAULT_MAP_EMBED_URL: &str =
    "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3979.0!2d73.5!3d4.2!2m3!1f0!2f0!3f0";
const DEFAULT_MAP_LINK_URL: &str = "https://maps.google.com/?q=4.2,73.5";
const DEFAULT_ITEMS_PER_PAGE: usize = 6;

/// Runtime settings for the site.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Firestore project; `None` means the built-in sample content.
    pub firestore_project_id: Option<String>,
    pub firestore_api_key: Option<String>,
    pub firestore_base_url: String,
    /// URL the map embed loads.
    pub map_embed_url: String,
    /// External link offered when the embed gives up.
    pub map_link_url: String,
    pub max_retries: u32,
    pub retry_delay: Duration,
    pub items_per_page: usize,
    pub max_visible_pages: usize,
    /// Log destination; `None` disables logging.
    pub log_file: Option<PathBuf>,
    /// `EnvFilter` directive string.
    pub log_filter: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            firestore_project_id: None,
            firestore_api_key: None,
            firestore_base_url: DEFAULT_FIRESTORE_URL.to_string(),
            map_embed_url: DEFAULT_MAP_EMBED_URL.to_string(),
            map_link_url: DEFAULT_MAP_LINK_URL.to_string(),
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay: DEFAULT_RETRY_DELAY,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            max_visible_pages: DEFAULT_MAX_VISIBLE_PAGES,
            log_file: default_log_file(),
            log_filter: "info".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by any `RESORT_*` variables that are set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(project) = non_empty(ENV_FIRESTORE_PROJECT) {
            config.firestore_project_id = Some(project);
        }
        if let Some(key) = non_empty(ENV_FIRESTORE_API_KEY) {
            config.firestore_api_key = Some(key);
        }
        if let Some(url) = non_empty(ENV_FIRESTORE_URL) {
            config.firestore_base_url = url;
        }
        if let Some(url) = non_empty(ENV_MAP_EMBED_URL) {
            config.map_embed_url = url;
        }
        if let Some(url) = non_empty(ENV_MAP_LINK_URL) {
            config.map_link_url = url;
        }
        if let Some(raw) = non_empty(ENV_EMBED_MAX_RETRIES) {
            config.max_retries = parse_value(ENV_EMBED_MAX_RETRIES, &raw)?;
        }
        if let Some(raw) = non_empty(ENV_EMBED_RETRY_MS) {
            config.retry_delay = Duration::from_millis(parse_value(ENV_EMBED_RETRY_MS, &raw)?);
        }
        if let Some(raw) = non_empty(ENV_ITEMS_PER_PAGE) {
            let items: usize = parse_value(ENV_ITEMS_PER_PAGE, &raw)?;
            if items == 0 {
                return Err(ConfigError::InvalidValue {
                    key: ENV_ITEMS_PER_PAGE.to_string(),
                    value: raw,
                    reason: "must be at least 1".to_string(),
                });
            }
            config.items_per_page = items;
        }
        if let Some(path) = non_empty(ENV_LOG_FILE) {
            config.log_file = Some(PathBuf::from(path));
        }
        if let Some(filter) = non_empty(ENV_LOG) {
            config.log_filter = filter;
        }

        Ok(config)
    }

    pub fn with_firestore_project(mut self, project_id: impl Into<String>) -> Self {
        self.firestore_project_id = Some(project_id.into());
        self
    }

    pub fn with_firestore_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.firestore_api_key = Some(api_key.into());
        self
    }

    /// Drop the Firestore project so the sample content is used.
    pub fn offline(mut self) -> Self {
        self.firestore_project_id = None;
        self
    }

    pub fn with_map_urls(mut self, embed_url: impl Into<String>, link_url: impl Into<String>) -> Self {
        self.map_embed_url = embed_url.into();
        self.map_link_url = link_url.into();
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    /// Page size for listings; zero is bumped to one.
    pub fn with_items_per_page(mut self, items_per_page: usize) -> Self {
        self.items_per_page = items_per_page.max(1);
        self
    }

    pub fn with_log_file(mut self, log_file: Option<PathBuf>) -> Self {
        self.log_file = log_file;
        self
    }

    /// Retry policy for the map embed.
    pub fn embed_config(&self) -> EmbedConfig {
        EmbedConfig {
            max_retries: self.max_retries,
            retry_delay: self.retry_delay,
        }
    }

    pub fn is_offline(&self) -> bool {
        self.firestore_project_id.is_none()
    }
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|err: T::Err| ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw.to_string(),
            reason: err.to_string(),
        })
}

/// `~/.resort/resort.log`, when a home directory exists.
pub fn default_log_file() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".resort").join("resort.log"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.retry_delay, Duration::from_millis(2000));
        assert_eq!(config.items_per_page, 6);
        assert_eq!(config.max_visible_pages, 5);
        assert!(config.is_offline());
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_lookup_overrides() {
        let config = SiteConfig::from_lookup(lookup(&[
            (ENV_FIRESTORE_PROJECT, "resort-prod"),
            (ENV_EMBED_MAX_RETRIES, "5"),
            (ENV_EMBED_RETRY_MS, "250"),
            (ENV_ITEMS_PER_PAGE, " 9 "),
            (ENV_LOG, "resort_site=debug"),
        ]))
        .unwrap();

        assert_eq!(config.firestore_project_id.as_deref(), Some("resort-prod"));
        assert!(!config.is_offline());
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.retry_delay, Duration::from_millis(250));
        assert_eq!(config.items_per_page, 9);
        assert_eq!(config.log_filter, "resort_site=debug");
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = SiteConfig::from_lookup(lookup(&[(ENV_FIRESTORE_PROJECT, "  ")])).unwrap();
        assert!(config.is_offline());
    }

    #[test]
    fn test_invalid_number() {
        let err = SiteConfig::from_lookup(lookup(&[(ENV_EMBED_MAX_RETRIES, "three")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == ENV_EMBED_MAX_RETRIES));
    }

    #[test]
    fn test_zero_items_per_page_rejected() {
        let err = SiteConfig::from_lookup(lookup(&[(ENV_ITEMS_PER_PAGE, "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_builder() {
        let config = SiteConfig::new()
            .with_firestore_project("p")
            .with_max_retries(1)
            .with_retry_delay(Duration::from_millis(10))
            .with_items_per_page(0)
            .offline();
        assert!(config.is_offline());
        assert_eq!(config.items_per_page, 1);
        assert_eq!(
            config.embed_config(),
            EmbedConfig {
                max_retries: 1,
                retry_delay: Duration::from_millis(10)
            }
        );
    }
}
