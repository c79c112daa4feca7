//! Reading the list of locally attached transports.

use crate::transport::DeviceBridge;
use crate::types::TransportId;
use regex::Regex;
use std::sync::LazyLock;

/// An attached, authorized device line: `<identifier><whitespace>device`.
///
/// Identifiers are ASCII word characters, dots and colons, which covers
/// USB serials and `ip:port` forms.
static DEVICE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u)([\w.:]+)\s+device$").expect("device line pattern is valid")
});

/// Run the device listing and return its raw output.
///
/// A listing failure is not fatal: it is logged and treated as if no
/// devices were attached.
pub async fn list_transports<B: DeviceBridge + ?Sized>(bridge: &B) -> String {
    match bridge.list_devices().await {
        Ok(output) => output,
        Err(e) => {
            tracing::warn!(error = %e, "Could not get ADB devices");
            String::new()
        }
    }
}

/// Extract transport identifiers from `adb devices` output, in line order.
///
/// Headers, blank lines and devices in any state other than `device`
/// (`offline`, `unauthorized`, ...) are skipped.
pub fn parse_transports(output: &str) -> Vec<TransportId> {
    output
        .lines()
        .filter_map(|line| DEVICE_LINE.captures(line))
        .filter_map(|caps| caps.get(1))
        .map(|m| TransportId::new(m.as_str()))
        .collect()
}
