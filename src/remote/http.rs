//! HTTP client abstraction for the inventory service.
//!
//! The `HttpClient` trait keeps the deregistration logic testable without
//! real HTTP calls; `ReqwestHttpClient` is the production implementation.

use crate::error::{RemoteError, RemoteResult};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use std::time::Duration;

/// Response from an HTTP request. Only the status is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
}

impl HttpResponse {
    /// Status code with its canonical reason, e.g. `404 Not Found`.
    pub fn status_text(&self) -> String {
        StatusCode::from_u16(self.status)
            .map(|s| s.to_string())
            .unwrap_or_else(|_| self.status.to_string())
    }
}

/// Trait for executing inventory requests.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Send a bodyless `DELETE` with a bearer token and a JSON content type.
    ///
    /// # Errors
    /// Returns [`RemoteError::Transport`] if no response was received
    /// (connection failure, timeout, invalid URL). Non-2xx statuses are
    /// returned as responses.
    async fn delete(&self, url: &str, bearer_token: &str) -> RemoteResult<HttpResponse>;
}

/// Production HTTP client using reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Create a client whose requests give up after `timeout`.
    pub fn with_timeout(timeout: Duration) -> RemoteResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RemoteError::Client(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    #[tracing::instrument(skip(self, bearer_token))]
    async fn delete(&self, url: &str, bearer_token: &str) -> RemoteResult<HttpResponse> {
        let response = self
            .client
            .delete(url)
            .header(AUTHORIZATION, format!("Bearer {}", bearer_token))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| RemoteError::Transport {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status().as_u16();
        // Drain the body so the connection can be reused; its content is ignored.
        if let Err(e) = response.bytes().await {
            tracing::debug!(error = %e, "could not read response body");
        }

        tracing::debug!(status, "HTTP request completed");
        Ok(HttpResponse { status })
    }
}
