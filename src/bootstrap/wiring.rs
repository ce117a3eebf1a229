//! # Dependency Injection
//!
//! The only place that depends on clip-infra, clip-platform and clip-app
//! at once. It resolves configuration facts into concrete settings and
//! assembles [`AppDeps`]; it makes no runtime decisions.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clip_app::{AppDeps, RefreshPolicy, DEFAULT_POLL_INTERVAL};
use clip_core::app_dirs::AppDirs;
use clip_core::config::AppConfig;
use clip_core::ports::AppDirsPort;
use clip_infra::{FileFeedView, FileIdentityStore, HttpClipBackend, InMemoryEditorSurface, SystemClock};
use clip_platform::{host_client_info, ArboardClipboard, LogNotifier};

pub const DEFAULT_BASE_URL: &str = "https://127.0.0.1:8443";

pub type WiringResult<T> = Result<T, WiringError>;

/// Errors while assembling adapters.
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Data directory resolution failed: {0}")]
    AppDirs(String),

    #[error("Backend client initialization failed: {0}")]
    BackendInit(String),
}

/// Configuration with every empty value replaced by its default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeSettings {
    pub app_dirs: AppDirs,
    pub base_url: String,
    pub accept_invalid_certs: bool,
    pub poll_interval: Duration,
    pub policy: RefreshPolicy,
    pub feed_output: PathBuf,
    pub user_agent: String,
}

impl RuntimeSettings {
    pub fn resolve(config: &AppConfig, dirs: &dyn AppDirsPort) -> WiringResult<Self> {
        let app_dirs = if config.data_dir.as_os_str().is_empty() {
            dirs.get_app_dirs()
                .map_err(|e| WiringError::AppDirs(e.to_string()))?
        } else {
            AppDirs {
                app_data_root: config.data_dir.clone(),
            }
        };

        let base_url = if config.server_base_url.trim().is_empty() {
            DEFAULT_BASE_URL.to_string()
        } else {
            config.server_base_url.trim().to_string()
        };

        let poll_interval = match config.poll_interval_secs {
            0 => DEFAULT_POLL_INTERVAL,
            secs => Duration::from_secs(secs),
        };

        let feed_output = if config.feed_output.as_os_str().is_empty() {
            app_dirs.default_feed_output()
        } else {
            config.feed_output.clone()
        };

        Ok(Self {
            base_url,
            accept_invalid_certs: config.accept_invalid_certs.unwrap_or(true),
            poll_interval,
            policy: RefreshPolicy::from_flag(config.discard_stale_responses),
            feed_output,
            user_agent: config.user_agent.clone(),
            app_dirs,
        })
    }
}

/// Build every adapter and hand them to the application layer.
pub fn wire_dependencies(settings: &RuntimeSettings) -> WiringResult<AppDeps> {
    let backend = HttpClipBackend::new(&settings.base_url, settings.accept_invalid_certs)
        .map_err(|e| WiringError::BackendInit(e.to_string()))?;

    Ok(AppDeps {
        backend: Arc::new(backend),
        identity_store: Arc::new(FileIdentityStore::new(&settings.app_dirs.app_data_root)),
        editor: Arc::new(InMemoryEditorSurface::new()),
        view: Arc::new(FileFeedView::new(settings.feed_output.clone())),
        notifier: Arc::new(LogNotifier),
        clipboard: Arc::new(ArboardClipboard::new()),
        clock: Arc::new(SystemClock),
        client: host_client_info(&settings.user_agent),
    })
}
