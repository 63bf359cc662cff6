// Muxgen - Pin Mapping Table Generator
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

//! Signal shapes recognised by the miscellaneous catch-all family.
//!
//! The catch-all template itself has no pattern. These shapes are only used
//! by [`Registry::classify_miscellaneous`](crate::Registry::classify_miscellaneous)
//! to split a leftover name into peripheral base, instance and signal.

use crate::template::Decomposition;
use lazy_static::lazy_static;
use regex::Regex;

const SHAPES: &[&str] = &[
    // Families that normally have their own template but may be absent on some devices.
    r"^\s*(GPIO)([A-Z])_(\d+)\s*$",
    r"^\s*(FTM|TPM)(\d+)_(CH\d+)\s*$",
    r"^\s*(FTM)(\d+)_(QD_PH[A|B]|CLKIN[0-1]|FLT[0-9])\s*$",
    r"^\s*(SPI)(\d+)_(SOUT|SIN|SCK|SS|PCS\d*|MOSI|MISO|SS_B)\s*$",
    r"^\s*(I2C)(\d+)_(SDA|SCL|4WSCLOUT|4WSDAOUT)\s*$",
    r"^\s*(LPTMR)(\d+)_(ALT\d+)\s*$",
    r"^\s*(UART)(\d+)_(CTS_b|RTS_b|COL_b|RX|TX)\s*$",
    r"^\s*(LPUART)(\d+)_(CTS_b|RTS_b|COL_b|RX|TX)\s*$",
    r"^\s*(TSI)(\d+)_(CH\d+)\s*$",
    r"^\s*(LLWU)()_(P\d+)\s*$",
    r"^\s*(SCI)(\d+)_(RTS|CTS|TxD|RxD)\s*$",
    // Signals with no dedicated family.
    r"^\s*(ADC)(\d+)_(?:DM|DP|SE)(\d+[ab]?)\s*$",
    r"^\s*(FTM|TPM)()_(CLKIN\d+)\s*$",
    r"^\s*(SDHC)(\d+)_(CLKIN|D\d|CMD|DCLK)\s*$",
    r"^\s*(I2S)(\d+)_(TX_BCLK|TXD[0-1]|RXD[0-1]|TX_FS|RX_BCLK|MCLK|RX_FS)\s*$",
    r"^\s*(A?CMP)(\d+)_(IN\d*|OUT\d*)\s*$",
    r"^\s*(JTAG)()_(TCLK|TDI|TDO|TMS|TRST_b)\s*$",
    r"^\s*(SWD)()_(CLK|DIO|IO)\s*$",
    r"^\s*(EZP)()_(CLK|DI|DO|CS_b)\s*$",
    r"^\s*(TRACE)()_(SWO|CLKOUT|D[0-3])\s*$",
    r"^\s*(NMI)()_[bB]()\s*$",
    r"^\s*(USB\d*)(\d*)_(CLKIN|SOF_OUT|DP|DM)\s*$",
    r"^\s*(E?XTAL(?:32K?)?)(\d*)()\s*$",
    r"^\s*(EWM)()_(IN|OUT_b|OUT)\s*$",
    r"^\s*(PDB)(\d+)_(EXTRG)\s*$",
    r"^\s*(CMT)(\d*)_(IRO)\s*$",
    r"^\s*(RTC)(\d*)_(CLKOUT|CLKIN|WAKEUP_B)\s*$",
    r"^\s*(DAC)(\d+)_(OUT)\s*$",
    r"^\s*(VREF)(\d*)_(OUT)\s*$",
    r"^\s*(CLKOUT)()()\s*$",
    r"^\s*(CLKOUT32K)()()\s*$",
    r"^\s*(R?MII)(\d+)_(RXCLK|RXER|RXD[0-4]|CRS_DV|RXDV|TXEN|TXD[0-4]|TXCLK|CRS|TXER|COL|MDIO|MDC)\s*$",
    r"^\s*(CAN)(\d+)_(TX|RX)\s*$",
    r"^\s*(ENET)(\d*)_(1588_TMR[0-3]|CLKIN|1588_CLKIN)\s*$",
    r"^\s*(KBI)(\d+)_(P\d+)\s*$",
    r"^\s*(IRQ)()()\s*$",
    r"^\s*(RESET_[bB])()()\s*$",
    r"^\s*(CMP)(\d)(OUT|P[0-9])\s*$",
    r"^\s*(PWT)()_(IN\d+)\s*$",
    r"^\s*(LCD)()_(P\d+)(?:_fault)?\s*$",
    r"^\s*(FXIO)(\d+)_(D\d+)\s*$",
    r"^\s*(VOUT33|VREGIN)()()\s*$",
];

lazy_static! {
    static ref SHAPE_PATTERNS: Vec<Regex> = SHAPES
        .iter()
        .map(|shape| Regex::new(shape).unwrap())
        .collect();
}

/// Splits `name` using the first shape that matches it.
pub fn decompose(name: &str) -> Option<Decomposition> {
    SHAPE_PATTERNS
        .iter()
        .find_map(|re| Decomposition::from_captures(re, name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_shapes_compile() {
        assert_eq!(SHAPE_PATTERNS.len(), SHAPES.len());
    }

    #[test]
    fn test_decompose_known_shapes() {
        let parts = decompose("JTAG_TDI").unwrap();
        assert_eq!(
            (parts.base_name.as_str(), parts.instance.as_str(), parts.signal.as_str()),
            ("JTAG", "", "TDI")
        );

        let parts = decompose("ADC0_DP1").unwrap();
        assert_eq!(parts.base_name, "ADC");
        assert_eq!(parts.signal, "1");

        let parts = decompose("EXTAL32").unwrap();
        assert_eq!(parts.base_name, "EXTAL32");
        assert_eq!(parts.signal, "");

        let parts = decompose("UART2_TX").unwrap();
        assert_eq!(parts.instance, "2");
    }

    #[test]
    fn test_unknown_shape() {
        assert!(decompose("NOT_A_SIGNAL").is_none());
    }
}
