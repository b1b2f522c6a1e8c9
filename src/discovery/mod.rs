//! Peripheral Discovery
//!
//! Bounded, timed scan for advertising capture peripherals. The adapter is
//! abstracted behind [`AdvertisementSource`] so the scan policy (fixed
//! window, first-seen dedup, powered-on precondition) is testable without
//! radio hardware.

pub mod scan;

pub use scan::{scan, AdvertisementSource, DiscoveredDevice, DEFAULT_SCAN_WINDOW};
