//! # Configuration DTO
//!
//! Pure data: TOML → [`AppConfig`] mapping with no validation. Missing keys
//! become empty values; callers decide what an empty value means.

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend base URL, e.g. `https://192.168.1.10:8443`
    pub server_base_url: String,

    /// Accept self-signed certificates from the backend (`None` when unset)
    pub accept_invalid_certs: Option<bool>,

    /// Background refresh interval in seconds (0 when unset)
    pub poll_interval_secs: u64,

    /// Drop refresh responses older than one already applied
    pub discard_stale_responses: bool,

    /// Data directory (empty when unset)
    pub data_dir: PathBuf,

    /// Rendered feed document path (empty when unset)
    pub feed_output: PathBuf,

    /// User-agent string to classify instead of the host OS (may be empty)
    pub user_agent: String,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// This method must not contain validation or default value logic.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let str_at = |section: &str, key: &str| -> String {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };
        let bool_at = |section: &str, key: &str| -> bool {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_bool())
                .unwrap_or(false)
        };

        Ok(Self {
            server_base_url: str_at("server", "base_url"),
            accept_invalid_certs: toml_value
                .get("server")
                .and_then(|s| s.get("accept_invalid_certs"))
                .and_then(|v| v.as_bool()),
            poll_interval_secs: toml_value
                .get("sync")
                .and_then(|s| s.get("poll_interval_secs"))
                .and_then(|v| v.as_integer())
                .unwrap_or(0)
                .max(0) as u64,
            discard_stale_responses: bool_at("sync", "discard_stale_responses"),
            data_dir: PathBuf::from(str_at("storage", "data_dir")),
            feed_output: PathBuf::from(str_at("storage", "feed_output")),
            user_agent: str_at("client", "user_agent"),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            server_base_url: String::new(),
            accept_invalid_certs: None,
            poll_interval_secs: 0,
            discard_stale_responses: false,
            data_dir: PathBuf::new(),
            feed_output: PathBuf::new(),
            user_agent: String::new(),
        }
    }
}
