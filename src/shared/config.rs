//! Application configuration. Base link URL, storage, listen address.

use serde::Deserialize;
use tracing::warn;

use crate::adapters::http::DEFAULT_BASE_MEET_URL;

pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Unprefixed variables that may carry the base URL, in lookup order.
/// `BaseMeetUrl` is the key earlier deployments were configured with.
const BASE_MEET_URL_VARS: [&str; 2] = ["BASE_MEET_URL", "BaseMeetUrl"];

/// Which Directory backend to run with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Sqlite,
    Memory,
}

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Prefix for joinable links. Read from MEET_BASE_MEET_URL, BASE_MEET_URL or BaseMeetUrl.
    #[serde(default)]
    pub base_meet_url: Option<String>,

    /// Directory holding meetings.db. Read from MEET_DATA_DIR.
    #[serde(default)]
    pub data_dir: Option<String>,

    /// Listen address, e.g. 127.0.0.1:8080. Read from MEET_BIND_ADDR.
    #[serde(default)]
    pub bind_addr: Option<String>,

    /// "sqlite" (default) or "memory". Read from MEET_STORE.
    #[serde(default)]
    pub store: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("MEET"));
        if let Ok(path) = std::env::var("MEET_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let mut cfg: Self = c.build()?.try_deserialize()?;
        if cfg.base_meet_url.is_none() {
            cfg.base_meet_url = base_meet_url_from(|key| std::env::var(key).ok());
        }
        Ok(cfg)
    }

    /// Returns the link base URL. Defaults to https://meet.google.com if unset or blank.
    pub fn base_meet_url_or_default(&self) -> String {
        self.base_meet_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_BASE_MEET_URL)
            .to_string()
    }

    pub fn data_dir_or_default(&self) -> String {
        self.data_dir
            .clone()
            .unwrap_or_else(|| DEFAULT_DATA_DIR.to_string())
    }

    pub fn bind_addr_or_default(&self) -> String {
        self.bind_addr
            .clone()
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
    }

    /// Unknown store names fall back to SQLite.
    pub fn store_kind(&self) -> StoreKind {
        match self.store.as_deref().map(str::trim) {
            None | Some("") => StoreKind::Sqlite,
            Some(s) if s.eq_ignore_ascii_case("sqlite") => StoreKind::Sqlite,
            Some(s) if s.eq_ignore_ascii_case("memory") => StoreKind::Memory,
            Some(other) => {
                warn!(store = other, "unknown MEET_STORE, using sqlite");
                StoreKind::Sqlite
            }
        }
    }
}

/// First non-blank value among the unprefixed base URL variables.
fn base_meet_url_from(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    BASE_MEET_URL_VARS
        .iter()
        .filter_map(|key| lookup(*key))
        .find(|url| !url.trim().is_empty())
}
