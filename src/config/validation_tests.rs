use super::*;
use crate::config::StoreConfig;

#[test]
fn default_config_is_valid() {
    assert!(validate_config_semantics(&Config::default()).is_ok());
}

#[test]
fn explicit_current_version_is_valid() {
    let config = Config {
        version: Some("1".to_string()),
        ..Config::default()
    };
    assert!(validate_config_semantics(&config).is_ok());
}

#[test]
fn unsupported_version_is_rejected() {
    let config = Config {
        version: Some("2".to_string()),
        ..Config::default()
    };
    let err = validate_config_semantics(&config).unwrap_err();
    assert!(err.to_string().contains("Unsupported config version '2'"));
}

#[test]
fn zero_max_age_is_rejected() {
    let config = Config {
        store: StoreConfig {
            max_age_days: Some(0),
            ..StoreConfig::default()
        },
        ..Config::default()
    };
    let err = validate_config_semantics(&config).unwrap_err();
    assert!(err.to_string().contains("store.max_age_days"));
}

#[test]
fn zero_recent_points_is_rejected() {
    let mut config = Config::default();
    config.stats.recent_points = 0;
    let err = validate_config_semantics(&config).unwrap_err();
    assert!(err.to_string().contains("stats.recent_points"));
}

#[test]
fn empty_extensions_are_rejected() {
    let mut config = Config::default();
    config.counter.extensions.clear();
    let err = validate_config_semantics(&config).unwrap_err();
    assert!(err.to_string().contains("counter.extensions cannot be empty"));
}

#[test]
fn glob_extension_is_rejected() {
    let mut config = Config::default();
    config.counter.extensions = vec!["md".to_string(), "*.txt".to_string()];
    let err = validate_config_semantics(&config).unwrap_err();
    assert!(err.to_string().contains("counter.extensions[1]"));
}
