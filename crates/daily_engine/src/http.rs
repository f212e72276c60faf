use std::time::Duration;

use crate::FailureKind;

pub(crate) fn build_client(
    connect_timeout: Duration,
    request_timeout: Duration,
    user_agent: &str,
) -> Result<reqwest::Client, (FailureKind, String)> {
    reqwest::Client::builder()
        .connect_timeout(connect_timeout)
        .timeout(request_timeout)
        .user_agent(user_agent)
        .build()
        .map_err(|err| (FailureKind::Network, err.to_string()))
}

pub(crate) fn parse_http_url(raw: &str) -> Result<reqwest::Url, (FailureKind, String)> {
    let url = reqwest::Url::parse(raw).map_err(|err| (FailureKind::InvalidUrl, err.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err((FailureKind::InvalidUrl, format!("unsupported scheme {other}"))),
    }
}

pub(crate) fn classify_reqwest_error(err: &reqwest::Error) -> FailureKind {
    if err.is_timeout() {
        return FailureKind::Timeout;
    }
    if let Some(status) = err.status() {
        return FailureKind::HttpStatus(status.as_u16());
    }
    FailureKind::Network
}
