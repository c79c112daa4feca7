//! Removing devices from the remote user inventory.

use crate::config::ReleaseConfig;
use crate::error::{RemoteError, RemoteResult};
use crate::remote::http::{HttpClient, ReqwestHttpClient};

/// Path of the current user's device list on the service.
pub const USER_DEVICES_ENDPOINT: &str = "/api/v1/user/devices";

/// Deregisters devices from the inventory service, one request per serial.
///
/// Owns the HTTP client for the whole run. Requests are never retried.
pub struct RemoteDeregistrar<C> {
    client: C,
    base_url: String,
    access_token: String,
}

impl RemoteDeregistrar<ReqwestHttpClient> {
    /// Build a deregistrar with a reqwest client using the configured timeout.
    pub fn from_config(config: &ReleaseConfig) -> RemoteResult<Self> {
        let client = ReqwestHttpClient::with_timeout(config.request_timeout)?;
        Ok(Self::new(client, config))
    }
}

impl<C: HttpClient> RemoteDeregistrar<C> {
    /// Create a deregistrar around an existing client.
    pub fn new(client: C, config: &ReleaseConfig) -> Self {
        Self {
            client,
            base_url: config.host_url.trim_end_matches('/').to_string(),
            access_token: config.access_token.clone(),
        }
    }

    /// The client requests go through.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// URL of a device record in the user inventory.
    pub fn device_url(&self, serial: &str) -> String {
        format!("{}{}/{}", self.base_url, USER_DEVICES_ENDPOINT, serial)
    }

    /// Remove `serial` from the inventory. Only a 200 response counts.
    pub async fn deregister(&self, serial: &str) -> RemoteResult<()> {
        let url = self.device_url(serial);
        let response = self.client.delete(&url, &self.access_token).await?;

        if response.status != 200 {
            return Err(RemoteError::UnexpectedStatus {
                url,
                status: response.status_text(),
            });
        }
        Ok(())
    }
}
