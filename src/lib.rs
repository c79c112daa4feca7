//! # devfarm-release - Give checked-out device-farm devices back
//!
//! At the end of a pipeline run, every device that was reserved from the
//! device-control service has to be released: disconnected from the local
//! adb server and removed from the user's device list on the service.
//!
//! ## Workflow
//!
//! 1. List attached transports with `adb devices`
//! 2. Ask every attached device for its serial (`ro.serialno`)
//! 3. For each requested serial, in order:
//!    - `adb disconnect` its transport (if it is attached)
//!    - `DELETE /api/v1/user/devices/{serial}` on the service
//!
//! Every step is best-effort. A failure is logged and recorded in the
//! [`release::ReleaseReport`], and the batch carries on.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use devfarm_release::config::ReleaseConfig;
//! use devfarm_release::release::ReleaseOrchestrator;
//! use devfarm_release::remote::RemoteDeregistrar;
//! use devfarm_release::transport::AdbBridge;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ReleaseConfig::load("https://stf.example.com", "token", r#"["R58M1234"]"#)
//!         .unwrap();
//!     config.validate().unwrap();
//!
//!     let bridge = AdbBridge::default();
//!     let deregistrar = RemoteDeregistrar::from_config(&config).unwrap();
//!     let report = ReleaseOrchestrator::new(&bridge, &deregistrar)
//!         .run(&config.serials)
//!         .await;
//!
//!     println!("{} of {} released", report.released(), report.total());
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`config`] - Release configuration loading and validation
//! - [`transport`] - adb bridge, transport listing and serial resolution
//! - [`remote`] - Inventory HTTP client and deregistration
//! - [`release`] - Per-device orchestration and the release report
//! - [`output`] - Report rendering
//! - [`error`] - Error types

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod release;
pub mod remote;
pub mod transport;
pub mod types;

// Re-export commonly used types
pub use config::ReleaseConfig;
pub use error::{CliError, CommandError, ConfigError, RemoteError};
pub use release::{DeviceOutcome, ReleaseOrchestrator, ReleaseReport, StepOutcome};
pub use types::{SerialMap, TransportId};
