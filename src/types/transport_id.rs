//! Transport identifiers for locally attached devices.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Address under which adb currently reaches a device.
///
/// May be a USB serial, an `ip:port` pair, or any other attach-specific
/// token. It is not a stable device identity and can change across
/// reattachment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransportId(String);

impl TransportId {
    /// Wrap a raw transport token.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw token.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TransportId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl AsRef<str> for TransportId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Device serial to the transport it is currently attached through.
pub type SerialMap = HashMap<String, TransportId>;
