//! Outbound HTTP client for the upstream API.

use std::time::Duration;

use axum::body::Bytes;
use axum::http::StatusCode;
use thiserror::Error;

use crate::config::UpstreamConfig;

/// Errors raised while talking to the upstream API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The HTTP client could not be constructed.
    #[error("failed to build upstream client: {0}")]
    Build(#[source] reqwest::Error),

    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("upstream request failed: {0}")]
    Unavailable(#[source] reqwest::Error),

    /// The response started but its body could not be read in full.
    #[error("failed to read upstream body: {0}")]
    Read(#[source] reqwest::Error),
}

/// A fully buffered upstream response.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Client bound to a single upstream URL.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    url: String,
}

impl UpstreamClient {
    /// Build a client from configuration.
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let mut builder = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs));
        if !config.system_proxy {
            builder = builder.no_proxy();
        }

        let http = builder.build().map_err(UpstreamError::Build)?;

        Ok(Self {
            http,
            url: config.url.clone(),
        })
    }

    /// The URL every fetch targets.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issue a plain GET and read the whole body.
    ///
    /// The response stream is consumed here, so the connection goes back to
    /// the pool (or is closed) before this returns, whether or not the read
    /// succeeds.
    pub async fn fetch(&self) -> Result<UpstreamResponse, UpstreamError> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(UpstreamError::Unavailable)?;

        let status = response.status();
        let body = response.bytes().await.map_err(UpstreamError::Read)?;

        Ok(UpstreamResponse { status, body })
    }
}
