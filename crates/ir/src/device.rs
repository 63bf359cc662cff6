//! Device variants, packages and DMA request sources.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Location string meaning "this pin is not bonded out on the package".
pub const ABSENT_LOCATION: &str = "*";

/// A physical package: which pins are bonded out and at which location.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DevicePackage {
    /// Package name, e.g. `LQFP64`.
    pub name: String,
    /// Pin name to physical location (ball or pin number).
    #[serde(default)]
    locations: BTreeMap<String, String>,
}

impl DevicePackage {
    /// Creates a package with no pin locations.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            locations: BTreeMap::new(),
        }
    }

    /// Records a pin location. An empty location stands for the pin name
    /// itself; [`ABSENT_LOCATION`] leaves the pin unrecorded.
    pub fn add_location(&mut self, pin_name: &str, location: &str) {
        let location = location.trim();
        if location == ABSENT_LOCATION {
            return;
        }
        let location = if location.is_empty() {
            pin_name
        } else {
            location
        };
        self.locations
            .insert(pin_name.to_string(), location.to_string());
    }

    /// Physical location of a pin, `None` if the pin is not on this package.
    pub fn location(&self, pin_name: &str) -> Option<&str> {
        self.locations.get(pin_name).map(String::as_str)
    }

    /// All recorded `(pin name, location)` pairs.
    pub fn locations(&self) -> impl Iterator<Item = (&str, &str)> {
        self.locations
            .iter()
            .map(|(pin, loc)| (pin.as_str(), loc.as_str()))
    }
}

/// One orderable device variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInformation {
    /// Part number, e.g. `MK20DX128VLH5`.
    pub name: String,
    /// Reference manual identifier.
    pub manual: String,
    /// Name of the package this variant ships in.
    pub package: String,
}

/// A DMA multiplexer request source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DmaInfo {
    /// DMAMUX instance.
    pub dma_instance: u32,
    /// Channel (slot) number within the multiplexer.
    pub dma_channel: u32,
    /// Request source name, e.g. `UART0_Receive`.
    pub dma_source: String,
}
