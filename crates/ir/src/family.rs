//! Device family classification from a part-number prefix.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Family variant of a device, which decides the peripheral templates it gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceFamily {
    /// Base Kinetis K family. Any unrecognised prefix lands here.
    #[default]
    Mk,
    /// Kinetis E family.
    Mke,
    /// Kinetis L family.
    Mkl,
    /// Kinetis M family. Only port and miscellaneous templates apply.
    Mkm,
}

impl DeviceFamily {
    /// Classifies a device by the prefix of its name, e.g. `MKL25Z4` is [`DeviceFamily::Mkl`].
    pub fn from_device_name(name: &str) -> Self {
        if name.starts_with("MKE") {
            DeviceFamily::Mke
        } else if name.starts_with("MKL") {
            DeviceFamily::Mkl
        } else if name.starts_with("MKM") {
            DeviceFamily::Mkm
        } else {
            DeviceFamily::Mk
        }
    }

    /// Whether the analogue, timer and communication templates exist for this family.
    pub fn has_standard_peripherals(self) -> bool {
        self != DeviceFamily::Mkm
    }
}

impl fmt::Display for DeviceFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeviceFamily::Mk => "mk",
            DeviceFamily::Mke => "mke",
            DeviceFamily::Mkl => "mkl",
            DeviceFamily::Mkm => "mkm",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes() {
        assert_eq!(DeviceFamily::from_device_name("MKE04Z4"), DeviceFamily::Mke);
        assert_eq!(DeviceFamily::from_device_name("MKL25Z4"), DeviceFamily::Mkl);
        assert_eq!(DeviceFamily::from_device_name("MKM33Z5"), DeviceFamily::Mkm);
        assert_eq!(DeviceFamily::from_device_name("MK20D5"), DeviceFamily::Mk);
        assert_eq!(DeviceFamily::from_device_name("FRDM"), DeviceFamily::Mk);
        assert_eq!(DeviceFamily::from_device_name(""), DeviceFamily::Mk);
    }

    #[test]
    fn test_standard_peripherals() {
        assert!(DeviceFamily::Mkl.has_standard_peripherals());
        assert!(!DeviceFamily::Mkm.has_standard_peripherals());
    }
}
