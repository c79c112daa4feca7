//! Local transport layer.
//!
//! Everything that talks to the adb tool: listing attached devices,
//! resolving their serials and disconnecting them. The tool itself sits
//! behind [`DeviceBridge`] so the release flow can run against a fake.

pub mod adb;
pub mod inventory;
pub mod resolver;

pub use adb::AdbBridge;
pub use inventory::{list_transports, parse_transports};
pub use resolver::resolve_serials;

use crate::error::CommandResult;
use async_trait::async_trait;

/// Trait for the local device transport tool.
///
/// Calls are awaited one at a time; implementations don't need to handle
/// concurrent use of the underlying tool.
#[async_trait]
pub trait DeviceBridge: Send + Sync {
    /// Raw output of the device listing command.
    async fn list_devices(&self) -> CommandResult<String>;

    /// Ask the device behind `transport` for its serial number.
    async fn query_serial(&self, transport: &str) -> CommandResult<String>;

    /// Disconnect the device behind `transport`.
    ///
    /// An empty transport means the device is not attached locally and
    /// must fail without touching the tool.
    async fn disconnect(&self, transport: &str) -> CommandResult<()>;
}
