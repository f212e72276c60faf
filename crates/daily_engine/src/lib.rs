//! Daily engine: catalog retrieval, webhook delivery, asked-memory
//! persistence and the single-run orchestrator.
mod catalog;
mod config;
mod http;
mod notify;
mod persist;
mod runner;
mod types;

pub use catalog::{parse_catalog, CatalogSource, FetchSettings, LeetCodeCatalog, CATALOG_USER_AGENT};
pub use config::{
    ConfigError, DailyConfig, CONFIG_PATH_ENV, DEFAULT_ASKED_FILE, DEFAULT_CATALOG_URL,
    DEFAULT_CONFIG_FILE, DEFAULT_TIMEOUT_SECS,
};
pub use notify::{adaptive_card, card_text, DeliverySettings, Notifier, TeamsWebhook};
pub use persist::{ensure_dir, AtomicFileWriter, InMemoryStore, JsonFileStore, MemoryStore, PersistError};
pub use runner::{DailyRunner, RunError, RunReport};
pub use types::{DeliveryError, FailureKind, FetchError};
