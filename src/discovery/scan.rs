//! Bounded Advertisement Scan
//!
//! One scan operation collects advertising peripherals for a fixed window and
//! resolves with a deduplicated device list, or fails if the adapter is not
//! powered on.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::debug;

/// How long a single scan collects advertisements.
pub const DEFAULT_SCAN_WINDOW: Duration = Duration::from_secs(3);

/// One advertising peripheral as seen during a scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoveredDevice {
    /// Stable identifier used for dedup
    pub id: String,
    /// Hardware address as reported by the adapter
    pub address: String,
    /// Advertised local name; sources report `"Unknown"` when the
    /// advertisement carries none
    pub name: String,
    /// Signal strength at discovery time
    pub rssi: i16,
    /// Advertised service UUIDs
    pub services: Vec<String>,
}

/// Adapter abstraction for a scan.
pub trait AdvertisementSource {
    /// Whether the underlying adapter is powered on and able to scan.
    fn powered_on(&self) -> bool;

    /// Block for up to `budget` waiting for the next advertisement.
    /// Returns `None` when nothing arrived within the budget. Duplicate
    /// advertisements from the same peripheral are expected; dedup is the
    /// scan's job.
    fn next_advertisement(&mut self, budget: Duration) -> Option<DiscoveredDevice>;
}

/// Run one bounded scan over `source`.
///
/// Fails with [`Error::Scan`] if the adapter is not powered on. Otherwise
/// collects advertisements until `window` elapses and returns the devices in
/// first-seen order, deduplicated by id (first seen wins).
pub fn scan<S: AdvertisementSource>(source: &mut S, window: Duration) -> Result<Vec<DiscoveredDevice>> {
    if !source.powered_on() {
        return Err(Error::Scan("adapter not powered on".to_string()));
    }

    let deadline = Instant::now() + window;
    let mut devices: Vec<DiscoveredDevice> = Vec::new();

    while let Some(budget) = deadline.checked_duration_since(Instant::now()).filter(|b| !b.is_zero()) {
        let Some(device) = source.next_advertisement(budget) else {
            continue;
        };
        if devices.iter().any(|d| d.id == device.id) {
            continue;
        }
        debug!(id = %device.id, name = %device.name, rssi = device.rssi, "discovered peripheral");
        devices.push(device);
    }

    Ok(devices)
}
