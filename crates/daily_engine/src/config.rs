use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use daily_logging::daily_info;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::{DeliverySettings, FetchSettings};

pub const DEFAULT_CONFIG_FILE: &str = "config.json";
/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "LEETCODE_DAILY_CONFIG";
pub const DEFAULT_ASKED_FILE: &str = "asked_questions.json";
pub const DEFAULT_CATALOG_URL: &str = "https://leetcode.com/api/problems/all/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const WEBHOOK_FIELD: &str = "teams_webhook_url";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file '{}' not found", .0.display())]
    NotFound(PathBuf),
    #[error("configuration file '{}' could not be read: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("configuration file '{}' is not valid JSON: {source}", .path.display())]
    InvalidJson {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("'{field}' not set in '{}'", .path.display())]
    MissingField { path: PathBuf, field: &'static str },
    #[error("'{field}' is not a valid http(s) URL ({value}): {reason}")]
    InvalidUrl {
        field: &'static str,
        value: String,
        reason: String,
    },
    #[error("'{field}' is invalid: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    teams_webhook_url: Option<String>,
    asked_file: Option<PathBuf>,
    catalog_url: Option<String>,
    request_timeout_secs: Option<u64>,
}

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyConfig {
    pub webhook_url: Url,
    pub asked_file: PathBuf,
    pub catalog_url: Url,
    pub request_timeout: Duration,
}

impl DailyConfig {
    /// Config path from `LEETCODE_DAILY_CONFIG`, else `./config.json`.
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_PATH_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let raw: RawConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::InvalidJson {
                path: path.to_path_buf(),
                source,
            })?;

        let config = Self::resolve(raw, path)?;
        daily_info!(
            "Loaded configuration from {:?} (asked_file={:?})",
            path,
            config.asked_file
        );
        Ok(config)
    }

    fn resolve(raw: RawConfig, path: &Path) -> Result<Self, ConfigError> {
        let webhook = raw
            .teams_webhook_url
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingField {
                path: path.to_path_buf(),
                field: WEBHOOK_FIELD,
            })?;
        let webhook_url = parse_http_url(WEBHOOK_FIELD, webhook.trim())?;

        let catalog_url = parse_http_url(
            "catalog_url",
            raw.catalog_url.as_deref().unwrap_or(DEFAULT_CATALOG_URL),
        )?;

        let timeout_secs = raw.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_secs",
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            webhook_url,
            asked_file: raw
                .asked_file
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ASKED_FILE)),
            catalog_url,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            url: self.catalog_url.to_string(),
            connect_timeout: self.request_timeout,
            request_timeout: self.request_timeout,
            ..FetchSettings::default()
        }
    }

    pub fn delivery_settings(&self) -> DeliverySettings {
        DeliverySettings {
            webhook_url: self.webhook_url.to_string(),
            connect_timeout: self.request_timeout,
            request_timeout: self.request_timeout,
        }
    }
}

fn parse_http_url(field: &'static str, value: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUrl {
        field,
        value: value.to_string(),
        reason,
    };
    let url = Url::parse(value).map_err(|err| invalid(err.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme {other}"))),
    }
}
