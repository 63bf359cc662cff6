//! Physical package pins.

use crate::error::{ModelError, Result};
use crate::mapping::MuxSelection;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref PORT_PIN_PATTERN: Regex = Regex::new(r"^\s*PT([A-Z])(\d+)\s*$").unwrap();
}

/// Port letter and bit number decoded from a `PT<letter><digits>` pin name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PortPin {
    /// Port letter, e.g. `C` for `PTC1`.
    pub port: char,
    /// Bit number within the port, e.g. `1` for `PTC1`.
    pub number: u32,
}

impl PortPin {
    /// Decodes a canonical pin name. Returns `None` for anything else (analogue-only pins etc.).
    pub fn decode(name: &str) -> Option<Self> {
        let caps = PORT_PIN_PATTERN.captures(name)?;
        let port = caps.get(1)?.as_str().chars().next()?;
        let number = caps.get(2)?.as_str().parse().ok()?;
        Some(Self { port, number })
    }
}

/// A physical package pin that may carry several functions through its multiplexer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pin {
    /// Pin name as it appears in the device description (e.g. `PTC1`, `ADC0_DP0`).
    pub name: String,

    /// Decoded port/bit, if the name follows the `PT<letter><digits>` pattern.
    pub port_pin: Option<PortPin>,

    /// Mux selection active out of reset.
    #[serde(default)]
    reset_value: Option<MuxSelection>,

    /// Mux selection applied by default pin mapping.
    #[serde(default)]
    default_value: Option<MuxSelection>,
}

impl Pin {
    /// Creates a pin, decoding its port and bit number when possible.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let port_pin = PortPin::decode(&name);
        Self {
            name,
            port_pin,
            reset_value: None,
            default_value: None,
        }
    }

    /// Pin name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reset mux selection, if set.
    pub fn reset_value(&self) -> Option<MuxSelection> {
        self.reset_value
    }

    /// Default mux selection, if set.
    pub fn default_value(&self) -> Option<MuxSelection> {
        self.default_value
    }

    /// Sets the reset mux selection. Fails if one is already present.
    pub fn set_reset_value(&mut self, mux: MuxSelection) -> Result<()> {
        if let Some(current) = self.reset_value {
            return Err(ModelError::StateAlreadySet {
                owner: format!("Pin {}", self.name),
                what: "reset value",
                current: current.to_string(),
            });
        }
        self.reset_value = Some(mux);
        Ok(())
    }

    /// Sets the default mux selection. Fails if one is already present.
    pub fn set_default_value(&mut self, mux: MuxSelection) -> Result<()> {
        if let Some(current) = self.default_value {
            return Err(ModelError::StateAlreadySet {
                owner: format!("Pin {}", self.name),
                what: "default value",
                current: current.to_string(),
            });
        }
        self.default_value = Some(mux);
        Ok(())
    }

    /// Port clock enable mask, e.g. `PORTC_CLOCK_MASK`.
    pub fn clock_mask(&self) -> Option<String> {
        self.port_pin
            .map(|pp| format!("PORT{}_CLOCK_MASK", pp.port))
    }

    /// PORT block base pointer, e.g. `PORTC_BasePtr`.
    pub fn port_base_ptr(&self) -> Option<String> {
        self.port_pin.map(|pp| format!("PORT{}_BasePtr", pp.port))
    }

    /// GPIO block base pointer, e.g. `GPIOC_BasePtr`.
    pub fn gpio_base_ptr(&self) -> Option<String> {
        self.port_pin.map(|pp| format!("GPIO{}_BasePtr", pp.port))
    }

    /// Bit number within the GPIO port.
    pub fn gpio_bit(&self) -> Option<u32> {
        self.port_pin.map(|pp| pp.number)
    }

    /// PCR register expression, e.g. `&PORTC->PCR[1]`, or `0` when the pin has no port.
    pub fn pcr(&self) -> String {
        match self.port_pin {
            Some(pp) => format!("&PORT{}->PCR[{}]", pp.port, pp.number),
            None => "0".to_string(),
        }
    }

    /// PCR register address as an integer expression.
    pub fn pcr_address(&self) -> Option<String> {
        self.port_pin.map(|pp| {
            format!(
                "PORT{}_BasePtr+offsetof(PORT_Type,PCR[{}])",
                pp.port, pp.number
            )
        })
    }

    /// GPIO template class, e.g. `GpioC<1>`.
    pub fn gpio_class(&self) -> Option<String> {
        self.port_pin
            .map(|pp| format!("Gpio{}<{}>", pp.port, pp.number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_port_pin() {
        let pin = Pin::new("PTC1");
        assert_eq!(pin.port_pin, Some(PortPin { port: 'C', number: 1 }));
        assert_eq!(pin.clock_mask().as_deref(), Some("PORTC_CLOCK_MASK"));
        assert_eq!(pin.port_base_ptr().as_deref(), Some("PORTC_BasePtr"));
        assert_eq!(pin.gpio_base_ptr().as_deref(), Some("GPIOC_BasePtr"));
        assert_eq!(pin.gpio_bit(), Some(1));
        assert_eq!(pin.pcr(), "&PORTC->PCR[1]");
        assert_eq!(
            pin.pcr_address().as_deref(),
            Some("PORTC_BasePtr+offsetof(PORT_Type,PCR[1])")
        );
        assert_eq!(pin.gpio_class().as_deref(), Some("GpioC<1>"));
    }

    #[test]
    fn test_analogue_pin_has_no_derivations() {
        let pin = Pin::new("ADC0_DP0");
        assert!(pin.port_pin.is_none());
        assert!(pin.clock_mask().is_none());
        assert!(pin.gpio_class().is_none());
        assert_eq!(pin.pcr(), "0");
    }

    #[test]
    fn test_surrounding_whitespace_is_tolerated() {
        assert_eq!(
            PortPin::decode(" PTE19 "),
            Some(PortPin { port: 'E', number: 19 })
        );
        assert_eq!(PortPin::decode("PTc1"), None);
        assert_eq!(PortPin::decode("PTC"), None);
    }

    #[test]
    fn test_reset_value_set_once() {
        let mut pin = Pin::new("PTA0");
        pin.set_reset_value(MuxSelection::Mux(7)).unwrap();
        let err = pin.set_reset_value(MuxSelection::Mux(1)).unwrap_err();
        assert!(matches!(err, ModelError::StateAlreadySet { what: "reset value", .. }));
        assert_eq!(pin.reset_value(), Some(MuxSelection::Mux(7)));
    }

    #[test]
    fn test_default_value_set_once() {
        let mut pin = Pin::new("PTA0");
        pin.set_default_value(MuxSelection::Mux(2)).unwrap();
        assert!(pin.set_default_value(MuxSelection::Mux(2)).is_err());
    }
}
