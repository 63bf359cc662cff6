//! Mux selections and pin mappings.

use crate::error::ModelError;
use crate::ids::{FunctionId, PinId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Highest mux value a PORT PCR register can select.
pub const MAX_MUX_VALUE: u8 = 7;

/// Multiplexer value routing one or more functions onto a pin.
///
/// The three sentinels sort ahead of the numeric selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MuxSelection {
    /// Pin is disabled.
    Disabled,
    /// Selection active out of reset.
    Reset,
    /// Signal is permanently attached to the pin and has no mux setting.
    Fixed,
    /// An explicit PCR mux value (ALT0..ALT7).
    Mux(u8),
}

impl MuxSelection {
    /// Builds a numeric selection, rejecting values the PCR MUX field cannot hold.
    pub fn mux(value: u8) -> Result<Self, ModelError> {
        if value > MAX_MUX_VALUE {
            return Err(ModelError::InvalidMuxSelection(value.to_string()));
        }
        Ok(MuxSelection::Mux(value))
    }

    /// The numeric PCR mux value, `None` for the sentinels.
    pub fn value(self) -> Option<u8> {
        match self {
            MuxSelection::Mux(value) => Some(value),
            _ => None,
        }
    }

    /// True for `Disabled`, `Reset` and `Fixed`.
    pub fn is_sentinel(self) -> bool {
        self.value().is_none()
    }
}

impl fmt::Display for MuxSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MuxSelection::Disabled => f.write_str("Disabled"),
            MuxSelection::Reset => f.write_str("Reset"),
            MuxSelection::Fixed => f.write_str("Fixed"),
            MuxSelection::Mux(value) => write!(f, "ALT{}", value),
        }
    }
}

impl FromStr for MuxSelection {
    type Err = ModelError;

    /// Accepts `Disabled`, `Reset`, `Fixed` (any case), `ALTn`, `muxN` or a bare number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();
        match lower.as_str() {
            "disabled" => return Ok(MuxSelection::Disabled),
            "reset" => return Ok(MuxSelection::Reset),
            "fixed" => return Ok(MuxSelection::Fixed),
            _ => {}
        }
        let digits = lower
            .strip_prefix("alt")
            .or_else(|| lower.strip_prefix("mux"))
            .unwrap_or(&lower);
        let value: u8 = digits
            .parse()
            .map_err(|_| ModelError::InvalidMuxSelection(trimmed.to_string()))?;
        MuxSelection::mux(value).map_err(|_| ModelError::InvalidMuxSelection(trimmed.to_string()))
    }
}

/// The join of one pin and one mux selection to the functions it carries.
///
/// Functions sharing a mapping are electrically aliased at that selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingInfo {
    /// Pin being multiplexed.
    pub pin: PinId,
    /// Selection routing the functions onto the pin.
    pub mux: MuxSelection,
    /// Aliased functions in insertion order.
    pub functions: Vec<FunctionId>,
}

impl MappingInfo {
    /// Creates an empty mapping for `(pin, mux)`.
    pub fn new(pin: PinId, mux: MuxSelection) -> Self {
        Self {
            pin,
            mux,
            functions: Vec::new(),
        }
    }

    /// Whether `function` is already recorded against this mapping.
    pub fn contains(&self, function: FunctionId) -> bool {
        self.functions.contains(&function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selections() {
        assert_eq!("ALT4".parse::<MuxSelection>().unwrap(), MuxSelection::Mux(4));
        assert_eq!("mux0".parse::<MuxSelection>().unwrap(), MuxSelection::Mux(0));
        assert_eq!("7".parse::<MuxSelection>().unwrap(), MuxSelection::Mux(7));
        assert_eq!("disabled".parse::<MuxSelection>().unwrap(), MuxSelection::Disabled);
        assert_eq!("Reset".parse::<MuxSelection>().unwrap(), MuxSelection::Reset);
        assert_eq!("FIXED".parse::<MuxSelection>().unwrap(), MuxSelection::Fixed);
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!("ALT8".parse::<MuxSelection>().is_err());
        assert!("bogus".parse::<MuxSelection>().is_err());
        assert!(MuxSelection::mux(9).is_err());
    }

    #[test]
    fn test_sentinels_sort_first() {
        let mut sels = vec![
            MuxSelection::Mux(3),
            MuxSelection::Fixed,
            MuxSelection::Mux(0),
            MuxSelection::Reset,
            MuxSelection::Disabled,
        ];
        sels.sort();
        assert_eq!(
            sels,
            vec![
                MuxSelection::Disabled,
                MuxSelection::Reset,
                MuxSelection::Fixed,
                MuxSelection::Mux(0),
                MuxSelection::Mux(3),
            ]
        );
    }

    #[test]
    fn test_value_and_display() {
        assert_eq!(MuxSelection::Mux(4).value(), Some(4));
        assert_eq!(MuxSelection::Reset.value(), None);
        assert!(MuxSelection::Fixed.is_sentinel());
        assert_eq!(MuxSelection::Mux(2).to_string(), "ALT2");
    }
}
