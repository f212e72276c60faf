use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use daily_engine::{ConfigError, DailyConfig, DEFAULT_ASKED_FILE, DEFAULT_CATALOG_URL};
use tempfile::TempDir;

fn write_config(temp: &TempDir, content: &str) -> PathBuf {
    let path = temp.path().join("config.json");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn minimal_config_gets_defaults() {
    let temp = TempDir::new().unwrap();
    let path = write_config(
        &temp,
        r#"{"teams_webhook_url": "https://example.webhook.office.com/webhookb2/abc"}"#,
    );

    let config = DailyConfig::load(&path).unwrap();
    assert_eq!(
        config.webhook_url.as_str(),
        "https://example.webhook.office.com/webhookb2/abc"
    );
    assert_eq!(config.asked_file, PathBuf::from(DEFAULT_ASKED_FILE));
    assert_eq!(config.catalog_url.as_str(), DEFAULT_CATALOG_URL);
    assert_eq!(config.request_timeout, Duration::from_secs(10));
}

#[test]
fn optional_fields_are_honoured() {
    let temp = TempDir::new().unwrap();
    let path = write_config(
        &temp,
        r#"{
            "teams_webhook_url": "http://localhost:8080/hook",
            "asked_file": "/var/lib/daily/asked.json",
            "catalog_url": "http://localhost:8080/problems",
            "request_timeout_secs": 3,
            "unrelated": true
        }"#,
    );

    let config = DailyConfig::load(&path).unwrap();
    assert_eq!(config.asked_file, PathBuf::from("/var/lib/daily/asked.json"));
    assert_eq!(config.request_timeout, Duration::from_secs(3));

    let fetch = config.fetch_settings();
    assert_eq!(fetch.url, "http://localhost:8080/problems");
    assert_eq!(fetch.request_timeout, Duration::from_secs(3));
    assert_eq!(
        config.delivery_settings().webhook_url,
        "http://localhost:8080/hook"
    );
}

#[test]
fn missing_file_is_reported() {
    let temp = TempDir::new().unwrap();
    let err = DailyConfig::load(&temp.path().join("config.json")).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound(_)));
    assert!(err.to_string().contains("not found"));
}

#[test]
fn invalid_json_is_reported() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, "{ teams_webhook_url: nope");
    let err = DailyConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidJson { .. }));
}

#[test]
fn missing_or_empty_webhook_is_reported() {
    let temp = TempDir::new().unwrap();
    for content in ["{}", r#"{"teams_webhook_url": ""}"#, r#"{"teams_webhook_url": null}"#] {
        let path = write_config(&temp, content);
        let err = DailyConfig::load(&path).unwrap_err();
        assert!(
            matches!(err, ConfigError::MissingField { field: "teams_webhook_url", .. }),
            "unexpected error for {content}: {err}"
        );
    }
}

#[test]
fn non_http_webhook_is_rejected() {
    let temp = TempDir::new().unwrap();
    for content in [
        r#"{"teams_webhook_url": "ftp://example.com/hook"}"#,
        r#"{"teams_webhook_url": "not a url"}"#,
    ] {
        let path = write_config(&temp, content);
        let err = DailyConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }), "{err}");
    }
}

#[test]
fn zero_timeout_is_rejected() {
    let temp = TempDir::new().unwrap();
    let path = write_config(
        &temp,
        r#"{"teams_webhook_url": "https://example.com/hook", "request_timeout_secs": 0}"#,
    );
    let err = DailyConfig::load(&path).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidValue {
            field: "request_timeout_secs",
            ..
        }
    ));
}
