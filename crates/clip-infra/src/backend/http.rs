//! REST adapter for the shared clip backend.

use async_trait::async_trait;
use clip_core::ports::{BackendError, ClipBackendPort};
use clip_core::Clip;
use reqwest::{Response, StatusCode};
use tracing::{debug, instrument};

/// Talks to the four backend endpoints over HTTP(S).
pub struct HttpClipBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpClipBackend {
    /// Build a client for `base_url`.
    ///
    /// `accept_invalid_certs` lets the client reach a backend serving a
    /// self-signed certificate on the local network. No request timeout is
    /// set: a slow response is still applied when it finally arrives.
    pub fn new(base_url: &str, accept_invalid_certs: bool) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()
            .map_err(|e| BackendError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

fn status_error(status: StatusCode) -> BackendError {
    BackendError::Status {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or_default().to_string(),
    }
}

fn transport_error(error: reqwest::Error) -> BackendError {
    BackendError::Transport(error.to_string())
}

fn ensure_success(response: Response) -> Result<Response, BackendError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(status_error(status))
    }
}

#[async_trait]
impl ClipBackendPort for HttpClipBackend {
    #[instrument(skip(self))]
    async fn list_clips(&self) -> Result<Vec<Clip>, BackendError> {
        let response = self
            .client
            .get(self.url("clips"))
            .send()
            .await
            .map_err(transport_error)?;
        let response = ensure_success(response)?;

        // An empty table is served as `null`.
        let clips: Option<Vec<Clip>> = response
            .json()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))?;
        let clips = clips.unwrap_or_default();
        debug!(count = clips.len(), "clips fetched");
        Ok(clips)
    }

    #[instrument(skip(self, clip), fields(id = %clip.id))]
    async fn add_clip(&self, clip: &Clip) -> Result<(), BackendError> {
        let response = self
            .client
            .post(self.url("add_clip"))
            .json(clip)
            .send()
            .await
            .map_err(transport_error)?;
        ensure_success(response)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn flush(&self) -> Result<(), BackendError> {
        let response = self
            .client
            .delete(self.url("flush"))
            .send()
            .await
            .map_err(transport_error)?;
        ensure_success(response)?;
        Ok(())
    }

    async fn validate_user(&self) -> Result<bool, BackendError> {
        let response = self
            .client
            .get(self.url("validate_user"))
            .send()
            .await
            .map_err(transport_error)?;
        Ok(response.status().is_success())
    }
}
