//! # Configuration Loader
//!
//! Reads `clipify.toml` and maps it to [`AppConfig`]. Pure data loading:
//! no validation and no defaults. Empty values are facts; the wiring step
//! decides what they mean.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clip_core::config::AppConfig;

pub const CONFIG_FILE_NAME: &str = "clipify.toml";
pub const CONFIG_PATH_ENV: &str = "CLIPIFY_CONFIG";

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// `$CLIPIFY_CONFIG` when set, otherwise `clipify.toml` in the working directory.
pub fn resolve_config_path() -> PathBuf {
    match std::env::var(CONFIG_PATH_ENV) {
        Ok(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(CONFIG_FILE_NAME),
    }
}

/// Load the config file if there is one.
///
/// A missing file yields [`AppConfig::empty`]; an unreadable or malformed
/// one is an error.
pub fn load_config_or_empty(config_path: &Path) -> anyhow::Result<AppConfig> {
    if !config_path.exists() {
        return Ok(AppConfig::empty());
    }
    load_config(config_path)
}
