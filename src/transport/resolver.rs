//! Mapping device serials to the transports they are attached through.

use crate::transport::DeviceBridge;
use crate::types::{SerialMap, TransportId};

/// Query each transport for its serial and build a serial -> transport map.
///
/// Transports whose serial cannot be read are left out with a warning.
/// If two transports report the same serial, the later one wins.
pub async fn resolve_serials<B: DeviceBridge + ?Sized>(
    bridge: &B,
    transports: &[TransportId],
) -> SerialMap {
    let mut devices = SerialMap::with_capacity(transports.len());

    for transport in transports {
        let serial = match bridge.query_serial(transport.as_str()).await {
            Ok(serial) => serial,
            Err(e) => {
                tracing::warn!(%transport, error = %e, "Could not get serial for device");
                continue;
            }
        };

        tracing::debug!(%serial, %transport, "resolved device serial");
        if let Some(previous) = devices.insert(serial.clone(), transport.clone()) {
            tracing::warn!(
                %serial,
                %previous,
                %transport,
                "serial reported by more than one transport, keeping the last"
            );
        }
    }

    devices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::fake::FakeBridge;

    fn transports(ids: &[&str]) -> Vec<TransportId> {
        ids.iter().copied().map(TransportId::from).collect()
    }

    #[tokio::test]
    async fn test_resolve_maps_serial_to_transport() {
        let bridge = FakeBridge::default()
            .serial("usb1", "SER-A")
            .serial("10.0.0.5:5555", "SER-B");

        let devices = resolve_serials(&bridge, &transports(&["usb1", "10.0.0.5:5555"])).await;

        assert_eq!(devices.len(), 2);
        assert_eq!(devices["SER-A"].as_str(), "usb1");
        assert_eq!(devices["SER-B"].as_str(), "10.0.0.5:5555");
    }

    #[tokio::test]
    async fn test_resolve_skips_failed_queries() {
        let bridge = FakeBridge::default().serial("good", "SER-A");

        let devices = resolve_serials(&bridge, &transports(&["bad", "good"])).await;

        assert_eq!(devices.len(), 1);
        assert_eq!(devices["SER-A"].as_str(), "good");
        assert_eq!(bridge.calls(), vec!["serial bad", "serial good"]);
    }

    #[tokio::test]
    async fn test_resolve_duplicate_serial_last_wins() {
        let bridge = FakeBridge::default()
            .serial("first", "SER-A")
            .serial("second", "SER-A");

        let devices = resolve_serials(&bridge, &transports(&["first", "second"])).await;

        assert_eq!(devices.len(), 1);
        assert_eq!(devices["SER-A"].as_str(), "second");
    }

    #[tokio::test]
    async fn test_resolve_nothing_attached() {
        let bridge = FakeBridge::default();
        assert!(resolve_serials(&bridge, &[]).await.is_empty());
        assert!(bridge.calls().is_empty());
    }
}
