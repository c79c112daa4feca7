//! Release workflow.
//!
//! Works out which requested serials are attached locally, then for each
//! serial in order disconnects it from adb and removes it from the remote
//! inventory. Failures are per device and per step: neither a failed
//! disconnect nor a failed deregistration stops anything else.

mod report;

pub use report::{DeviceOutcome, ReleaseReport, StepOutcome};

use crate::remote::{HttpClient, RemoteDeregistrar};
use crate::transport::{list_transports, parse_transports, resolve_serials, DeviceBridge};
use crate::types::SerialMap;

/// Drives the two-step release for a batch of serials.
pub struct ReleaseOrchestrator<'a, B: ?Sized, C> {
    bridge: &'a B,
    deregistrar: &'a RemoteDeregistrar<C>,
}

impl<'a, B, C> ReleaseOrchestrator<'a, B, C>
where
    B: DeviceBridge + ?Sized,
    C: HttpClient,
{
    /// Create an orchestrator over a transport bridge and a deregistrar.
    pub fn new(bridge: &'a B, deregistrar: &'a RemoteDeregistrar<C>) -> Self {
        Self {
            bridge,
            deregistrar,
        }
    }

    /// Map serials of the currently attached devices to their transports.
    pub async fn discover(&self) -> SerialMap {
        let listing = list_transports(self.bridge).await;
        let transports = parse_transports(&listing);
        tracing::debug!(count = transports.len(), "attached transports");
        resolve_serials(self.bridge, &transports).await
    }

    /// Discover attached devices, then release every serial.
    pub async fn run(&self, serials: &[String]) -> ReleaseReport {
        let report = ReleaseReport::new();
        let devices = self.discover().await;
        let outcomes = self.release_all(serials, &devices).await;
        report.finish(outcomes)
    }

    /// Release each serial in order.
    pub async fn release_all(
        &self,
        serials: &[String],
        devices: &SerialMap,
    ) -> Vec<DeviceOutcome> {
        let mut outcomes = Vec::with_capacity(serials.len());
        for serial in serials {
            outcomes.push(self.release_device(serial, devices).await);
        }
        outcomes
    }

    /// Disconnect and deregister one device. Both steps always run.
    pub async fn release_device(&self, serial: &str, devices: &SerialMap) -> DeviceOutcome {
        tracing::info!("Releasing device {}", serial);

        let transport = devices.get(serial).cloned();
        let target = transport.as_ref().map(|t| t.as_str()).unwrap_or_default();

        let disconnect = self.bridge.disconnect(target).await;
        match &disconnect {
            Ok(()) => tracing::info!(serial, transport = target, "Disconnected device from ADB"),
            Err(e) => tracing::warn!(serial, "Could not disconnect device from ADB: {}", e),
        }

        let deregister = self.deregistrar.deregister(serial).await;
        match &deregister {
            Ok(()) => tracing::info!(serial, "Removed device from control"),
            Err(e) => tracing::warn!(serial, "Could not remove device from control, error: {}", e),
        }

        DeviceOutcome {
            serial: serial.to_string(),
            transport,
            disconnect: StepOutcome::from_result(disconnect),
            deregister: StepOutcome::from_result(deregister),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReleaseConfig;
    use crate::remote::http::mock::MockHttpClient;
    use crate::transport::fake::FakeBridge;

    const LISTING: &str = "List of devices attached\n\
                           usb1\tdevice\n\
                           10.0.0.2:5555\tdevice\n\
                           usb3\tdevice\n\
                           usb9\toffline\n";

    fn serials(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn deregistrar(client: MockHttpClient) -> RemoteDeregistrar<MockHttpClient> {
        let config = ReleaseConfig::load("http://stf", "token", "").unwrap();
        RemoteDeregistrar::new(client, &config)
    }

    fn url(serial: &str) -> String {
        format!("http://stf/api/v1/user/devices/{}", serial)
    }

    fn attached_bridge() -> FakeBridge {
        FakeBridge::with_listing(LISTING)
            .serial("usb1", "SER-1")
            .serial("10.0.0.2:5555", "SER-2")
            .serial("usb3", "SER-3")
    }

    #[tokio::test]
    async fn test_all_devices_released() {
        let bridge = attached_bridge();
        let deregistrar = deregistrar(MockHttpClient::default());
        let orchestrator = ReleaseOrchestrator::new(&bridge, &deregistrar);

        let report = orchestrator.run(&serials(&["SER-1", "SER-2", "SER-3"])).await;

        assert_eq!(report.total(), 3);
        assert_eq!(report.released(), 3);
        assert!(!report.has_failures());
        assert_eq!(
            report.outcomes[1].transport.as_ref().map(|t| t.as_str()),
            Some("10.0.0.2:5555")
        );
    }

    #[tokio::test]
    async fn test_failed_disconnect_does_not_skip_deregistration() {
        let bridge = attached_bridge().failing_disconnect("10.0.0.2:5555");
        let deregistrar = deregistrar(MockHttpClient::default());
        let orchestrator = ReleaseOrchestrator::new(&bridge, &deregistrar);

        let report = orchestrator.run(&serials(&["SER-1", "SER-2", "SER-3"])).await;

        assert_eq!(
            deregistrar.client().urls(),
            vec![url("SER-1"), url("SER-2"), url("SER-3")]
        );
        assert!(!report.outcomes[1].disconnect.is_success());
        assert!(report.outcomes[1].deregister.is_success());
        assert!(report.outcomes[2].is_released());
        assert_eq!(report.failed(), 1);
    }

    #[tokio::test]
    async fn test_failed_deregistration_does_not_stop_batch() {
        let bridge = attached_bridge();
        let client = MockHttpClient::default()
            .status(&url("SER-1"), 500)
            .unreachable(&url("SER-2"));
        let deregistrar = deregistrar(client);
        let orchestrator = ReleaseOrchestrator::new(&bridge, &deregistrar);

        let report = orchestrator.run(&serials(&["SER-1", "SER-2", "SER-3"])).await;

        assert_eq!(report.deregistration_failures(), 2);
        assert!(report.outcomes.iter().all(|o| o.disconnect.is_success()));
        assert!(report.outcomes[2].is_released());
        assert_eq!(
            bridge
                .calls()
                .iter()
                .filter(|c| c.starts_with("disconnect"))
                .count(),
            3
        );
    }

    #[tokio::test]
    async fn test_unattached_device_still_deregistered() {
        let bridge = attached_bridge();
        let deregistrar = deregistrar(MockHttpClient::default());
        let orchestrator = ReleaseOrchestrator::new(&bridge, &deregistrar);

        let report = orchestrator.run(&serials(&["SER-REMOTE"])).await;

        let outcome = &report.outcomes[0];
        assert!(outcome.transport.is_none());
        assert_eq!(
            outcome.disconnect,
            StepOutcome::Failed {
                reason: "device has no known transport".to_string()
            }
        );
        assert!(outcome.deregister.is_success());
        assert_eq!(deregistrar.client().urls(), vec![url("SER-REMOTE")]);
    }

    #[tokio::test]
    async fn test_listing_failure_still_deregisters() {
        let bridge = FakeBridge::default();
        let deregistrar = deregistrar(MockHttpClient::default());
        let orchestrator = ReleaseOrchestrator::new(&bridge, &deregistrar);

        let report = orchestrator.run(&serials(&["SER-1", "SER-2"])).await;

        assert_eq!(report.total(), 2);
        assert_eq!(report.deregistration_failures(), 0);
        assert!(report.outcomes.iter().all(|o| !o.disconnect.is_success()));
    }

    #[tokio::test]
    async fn test_outcomes_follow_request_order() {
        let bridge = attached_bridge();
        let deregistrar = deregistrar(MockHttpClient::default());
        let orchestrator = ReleaseOrchestrator::new(&bridge, &deregistrar);

        let report = orchestrator.run(&serials(&["SER-3", "SER-1"])).await;

        let order: Vec<_> = report.outcomes.iter().map(|o| o.serial.as_str()).collect();
        assert_eq!(order, vec!["SER-3", "SER-1"]);
        let disconnects: Vec<_> = bridge
            .calls()
            .into_iter()
            .filter(|c| c.starts_with("disconnect"))
            .collect();
        assert_eq!(disconnects, vec!["disconnect usb3", "disconnect usb1"]);
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let bridge = attached_bridge();
        let deregistrar = deregistrar(MockHttpClient::default());
        let orchestrator = ReleaseOrchestrator::new(&bridge, &deregistrar);

        let report = orchestrator.run(&[]).await;

        assert_eq!(report.total(), 0);
        assert!(deregistrar.client().urls().is_empty());
    }
}
