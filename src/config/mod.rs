//! Configuration management for devfarm-release.
//!
//! Provides the release configuration loaded from the step inputs.

mod release;

pub use release::{parse_serial_list, ReleaseConfig, DEFAULT_REQUEST_TIMEOUT};
