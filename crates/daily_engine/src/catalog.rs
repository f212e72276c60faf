use std::time::Duration;

use daily_core::{Problem, ProblemId};
use daily_logging::{daily_debug, daily_info};
use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;

use crate::config::{DEFAULT_CATALOG_URL, DEFAULT_TIMEOUT_SECS};
use crate::http::{build_client, classify_reqwest_error, parse_http_url};
use crate::{FailureKind, FetchError};

pub const CATALOG_USER_AGENT: &str = "RandomLeetCodeTeamsScript/1.0";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
    pub user_agent: String,
    /// Checked only when the server sends a `Content-Type` header.
    pub allowed_content_types: Vec<String>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_CATALOG_URL.to_string(),
            connect_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_bytes: 32 * 1024 * 1024,
            user_agent: CATALOG_USER_AGENT.to_string(),
            allowed_content_types: vec![
                "application/json".to_string(),
                "text/json".to_string(),
            ],
        }
    }
}

/// Supplies the full problem list for one run.
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Problem>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct LeetCodeCatalog {
    settings: FetchSettings,
}

impl LeetCodeCatalog {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn is_content_type_allowed(&self, content_type: &str) -> bool {
        let ct = content_type.split(';').next().unwrap_or(content_type).trim();
        self.settings
            .allowed_content_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ct))
    }

    fn too_large(&self, actual: u64) -> FetchError {
        FetchError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual: Some(actual),
            },
            "response too large",
        )
    }
}

#[async_trait::async_trait]
impl CatalogSource for LeetCodeCatalog {
    async fn fetch(&self) -> Result<Vec<Problem>, FetchError> {
        let url = parse_http_url(&self.settings.url)
            .map_err(|(kind, message)| FetchError::new(kind, message))?;
        let client = build_client(
            self.settings.connect_timeout,
            self.settings.request_timeout,
            &self.settings.user_agent,
        )
        .map_err(|(kind, message)| FetchError::new(kind, message))?;

        daily_debug!("Fetching catalog from {}", url);
        let response = client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(content_len));
            }
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());
        if let Some(ct) = content_type.as_deref() {
            if !self.is_content_type_allowed(ct) {
                return Err(FetchError::new(
                    FailureKind::UnsupportedContentType {
                        content_type: ct.to_string(),
                    },
                    "unsupported content type",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(self.too_large(next_len));
            }
            bytes.extend_from_slice(&chunk);
        }

        let problems = parse_catalog(&bytes)?;
        daily_info!(
            "Fetched {} problems ({} bytes) from catalog",
            problems.len(),
            bytes.len()
        );
        Ok(problems)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogPayload {
    #[serde(default)]
    stat_status_pairs: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    stat: EntryStat,
    #[serde(default)]
    difficulty: EntryDifficulty,
    #[serde(default)]
    paid_only: bool,
}

#[derive(Debug, Deserialize)]
struct EntryStat {
    frontend_question_id: ProblemId,
    #[serde(rename = "question__title")]
    title: String,
    #[serde(rename = "question__title_slug")]
    slug: String,
}

#[derive(Debug, Default, Deserialize)]
struct EntryDifficulty {
    #[serde(default)]
    level: i64,
}

/// Decode the problem-list payload into catalog entries.
pub fn parse_catalog(bytes: &[u8]) -> Result<Vec<Problem>, FetchError> {
    let payload: CatalogPayload = serde_json::from_slice(bytes)
        .map_err(|err| FetchError::new(FailureKind::Parse, err.to_string()))?;

    Ok(payload
        .stat_status_pairs
        .into_iter()
        .map(|entry| Problem {
            id: entry.stat.frontend_question_id,
            title: entry.stat.title,
            slug: entry.stat.slug,
            paid_only: entry.paid_only,
            difficulty: entry.difficulty.level,
        })
        .collect())
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    FetchError::new(classify_reqwest_error(&err), err.to_string())
}
