//! Release configuration.
//!
//! Built once at startup from the three step inputs (host URL, access
//! token, JSON serial list) and never mutated afterwards.

use crate::error::{ConfigError, ConfigResult};
use std::time::Duration;

/// Default HTTP timeout for inventory requests.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything the release run needs to know about the remote service and
/// which devices to give back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseConfig {
    /// Base URL of the device-control service.
    pub host_url: String,
    /// Bearer token for the inventory API.
    pub access_token: String,
    /// Serials to release, in the order given.
    pub serials: Vec<String>,
    /// Timeout applied to each inventory request.
    pub request_timeout: Duration,
}

impl ReleaseConfig {
    /// Build a configuration from raw input values.
    ///
    /// `serial_list` is a JSON array of strings. An empty value means no
    /// devices; anything else that does not decode is an error.
    pub fn load(
        host_url: impl Into<String>,
        access_token: impl Into<String>,
        serial_list: &str,
    ) -> ConfigResult<Self> {
        Ok(Self {
            host_url: host_url.into(),
            access_token: access_token.into(),
            serials: parse_serial_list(serial_list)?,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        })
    }

    /// Set the inventory request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Log the loaded configuration. The access token is never printed.
    pub fn dump(&self) {
        tracing::info!("Config:");
        tracing::info!("STF host: {}", self.host_url);
        tracing::info!("Device serials: {:?}", self.serials);
    }

    /// Check the configuration shape.
    ///
    /// An empty serial list is valid and makes the run a no-op.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.host_url.starts_with("http") {
            return Err(ConfigError::InvalidHostUrl(self.host_url.clone()));
        }
        if self.access_token.is_empty() {
            return Err(ConfigError::MissingAccessToken);
        }
        if self.request_timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout);
        }
        Ok(())
    }
}

/// Decode the serial list input.
pub fn parse_serial_list(raw: &str) -> ConfigResult<Vec<String>> {
    if raw.is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(raw).map_err(|source| ConfigError::InvalidSerialList {
        raw: raw.to_string(),
        source,
    })
}
