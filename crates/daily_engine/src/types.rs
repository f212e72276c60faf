use std::fmt;

use thiserror::Error;

/// Failure classification shared by the catalog fetch and webhook delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    UnsupportedContentType { content_type: String },
    Parse,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::UnsupportedContentType { content_type } => {
                write!(f, "unsupported content type {content_type}")
            }
            FailureKind::Parse => write!(f, "unparsable body"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// The problem catalog could not be retrieved or understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("catalog fetch failed ({kind}): {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// The webhook did not accept the notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("webhook delivery failed ({kind}): {message}")]
pub struct DeliveryError {
    pub kind: FailureKind,
    pub message: String,
}

impl DeliveryError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}
