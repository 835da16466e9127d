// SiteConfig::from_env reads process environment variables, so these tests
// run serially and clean up after themselves.

use std::time::Duration;

use serial_test::serial;

use resort_site::config::{
    SiteConfig, ENV_EMBED_MAX_RETRIES, ENV_EMBED_RETRY_MS, ENV_FIRESTORE_API_KEY,
    ENV_FIRESTORE_PROJECT, ENV_FIRESTORE_URL, ENV_ITEMS_PER_PAGE, ENV_LOG, ENV_LOG_FILE,
    ENV_MAP_EMBED_URL, ENV_MAP_LINK_URL,
};
use resort_site::error::ConfigError;

const ALL_VARS: [&str; 10] = [
    ENV_FIRESTORE_PROJECT,
    ENV_FIRESTORE_API_KEY,
    ENV_FIRESTORE_URL,
    ENV_MAP_EMBED_URL,
    ENV_LOG,
    ENV_EMBED_MAX_RETRIES,
    ENV_EMBED_RETRY_MS,
    ENV_ITEMS_PER_PAGE,
    ENV_LOG_FILE,
    ENV_MAP_LINK_URL,
];

struct EnvGuard;

impl EnvGuard {
    fn set(vars: &[(&str, &str)]) -> Self {
        clear();
        for (key, value) in vars {
            std::env::set_var(key, value);
        }
        EnvGuard
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        clear();
    }
}

fn clear() {
    for key in ALL_VARS {
        std::env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_unset_environment_gives_defaults() {
    let _guard = EnvGuard::set(&[]);
    let config = SiteConfig::from_env().unwrap();
    assert_eq!(config, SiteConfig::default());
    assert!(config.is_offline());
}

#[test]
#[serial]
fn test_environment_overrides() {
    let _guard = EnvGuard::set(&[
        (ENV_FIRESTORE_PROJECT, "lagoon-prod"),
        (ENV_FIRESTORE_API_KEY, "abc123"),
        (ENV_EMBED_MAX_RETRIES, "1"),
        (ENV_EMBED_RETRY_MS, "500"),
        (ENV_ITEMS_PER_PAGE, "12"),
        (ENV_LOG_FILE, "/tmp/resort-test.log"),
        (ENV_MAP_LINK_URL, "https://maps.example/lagoon"),
    ]);

    let config = SiteConfig::from_env().unwrap();
    assert_eq!(config.firestore_project_id.as_deref(), Some("lagoon-prod"));
    assert_eq!(config.firestore_api_key.as_deref(), Some("abc123"));
    assert_eq!(config.embed_config().max_retries, 1);
    assert_eq!(config.embed_config().retry_delay, Duration::from_millis(500));
    assert_eq!(config.items_per_page, 12);
    assert_eq!(config.map_link_url, "https://maps.example/lagoon");
    assert_eq!(
        config.log_file.as_deref(),
        Some(std::path::Path::new("/tmp/resort-test.log"))
    );
}

#[test]
#[serial]
fn test_bad_retry_delay() {
    let _guard = EnvGuard::set(&[(ENV_EMBED_RETRY_MS, "2s")]);
    match SiteConfig::from_env() {
        Err(ConfigError::InvalidValue { key, value, .. }) => {
            assert_eq!(key, ENV_EMBED_RETRY_MS);
            assert_eq!(value, "2s");
        }
        other => panic!("expected invalid value, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_offline_flag_overrides_project() {
    let _guard = EnvGuard::set(&[(ENV_FIRESTORE_PROJECT, "lagoon-prod")]);
    let config = SiteConfig::from_env().unwrap().offline();
    assert!(config.is_offline());
}
