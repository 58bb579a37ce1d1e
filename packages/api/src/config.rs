//! # Client configuration — `users.toml`
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:3000"   # root of the users service
//!
//! [notice]
//! lifetime_ms = 3000                   # how long success notices stay visible
//! ```
//!
//! Every section has production defaults, so a missing or empty file is the
//! default configuration. On native targets [`ApiConfig::from_env`] reads
//! `users.toml` from the working directory (or the path in `USERS_CONFIG`) and
//! layers `USERS_API_BASE_URL` and `USERS_NOTICE_LIFETIME_MS` (read through
//! `dotenvy`) over it.

#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level client configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub api: EndpointConfig,
    #[serde(default)]
    pub notice: NoticeConfig,
}

/// Where the users service lives.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EndpointConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Success notice behaviour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoticeConfig {
    /// Visible lifetime of a success notice in milliseconds.
    #[serde(default = "default_notice_lifetime_ms")]
    pub lifetime_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_notice_lifetime_ms() -> u64 {
    3000
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            lifetime_ms: default_notice_lifetime_ms(),
        }
    }
}

impl ApiConfig {
    /// Create a config pointing at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: EndpointConfig {
                base_url: base_url.into(),
            },
            notice: NoticeConfig::default(),
        }
    }

    /// Builder method to set the notice lifetime.
    pub fn with_notice_lifetime_ms(mut self, ms: u64) -> Self {
        self.notice.lifetime_ms = ms;
        self
    }

    pub fn notice_lifetime(&self) -> Duration {
        Duration::from_millis(self.notice.lifetime_ms)
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "users.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Read a config file. A missing file is the default configuration; an
    /// unreadable or malformed one is logged and ignored.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn read_file(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                tracing::warn!("Ignoring {}: {e}", path.display());
                return Self::default();
            }
        };
        Self::from_toml(&text).unwrap_or_else(|e| {
            tracing::warn!("Ignoring malformed {}: {e}", path.display());
            Self::default()
        })
    }

    /// The config file overridden by environment variables (and a `.env`
    /// file, if any).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let path = std::env::var("USERS_CONFIG").unwrap_or_else(|_| Self::filename().to_string());
        Self::read_file(Path::new(&path)).with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `USERS_*` overrides looked up through `lookup`.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup("USERS_API_BASE_URL").filter(|v| !v.trim().is_empty()) {
            self.api.base_url = url.trim().to_string();
        }
        if let Some(raw) = lookup("USERS_NOTICE_LIFETIME_MS") {
            match raw.trim().parse::<u64>() {
                Ok(ms) => self.notice.lifetime_ms = ms,
                Err(e) => tracing::warn!("Ignoring USERS_NOTICE_LIFETIME_MS={raw:?}: {e}"),
            }
        }
        self
    }
}
