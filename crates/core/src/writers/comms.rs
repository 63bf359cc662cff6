// Muxgen - Pin Mapping Table Generator
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use super::lookup_index;
use crate::SignalWriter;
use muxgen_ir::PeripheralFunction;

const I2C_SIGNALS: &[&[&str]] = &[&["SCL"], &["SDA"], &["4WSCLOUT"], &["4WSDAOUT"]];

const SPI_SIGNALS: &[&[&str]] = &[
    &["SCK"],
    &["SIN", "MISO"],
    &["SOUT", "MOSI"],
    &["PCS0", "PCS", "SS"],
    &["PCS1"],
    &["PCS2"],
    &["PCS3"],
    &["PCS4"],
    &["PCS5"],
];

const UART_SIGNALS: &[&[&str]] = &[
    &["TX"],
    &["RX"],
    &["RTS_b", "RTS"],
    &["CTS_b", "CTS"],
    &["COL_b", "COL"],
];

/// LPUART has no collision input.
const LPUART_SIGNALS: &[&[&str]] = &[&["TX"], &["RX"], &["RTS_b", "RTS"], &["CTS_b", "CTS"]];

#[derive(Debug, Default)]
pub struct I2cWriter;

impl SignalWriter for I2cWriter {
    fn signal_index(&self, function: &PeripheralFunction) -> Option<usize> {
        lookup_index(I2C_SIGNALS, &function.signal)
    }

    fn group_name(&self) -> &'static str {
        "I2C_Group"
    }

    fn group_title(&self) -> &'static str {
        "I2C, Inter-Integrated-Circuit Interface"
    }

    fn group_brief(&self) -> Option<&'static str> {
        Some("Pins used for I2C functions")
    }
}

#[derive(Debug, Default)]
pub struct SpiWriter;

impl SignalWriter for SpiWriter {
    fn signal_index(&self, function: &PeripheralFunction) -> Option<usize> {
        lookup_index(SPI_SIGNALS, &function.signal)
    }

    fn group_name(&self) -> &'static str {
        "SPI_Group"
    }

    fn group_title(&self) -> &'static str {
        "SPI, Serial Peripheral Interface"
    }

    fn group_brief(&self) -> Option<&'static str> {
        Some("Pins used for SPI functions")
    }
}

/// UART and LPUART. The low-power variant has no `COL` slot.
#[derive(Debug, Default)]
pub struct UartWriter {
    low_power: bool,
}

impl UartWriter {
    pub fn uart() -> Self {
        Self { low_power: false }
    }

    pub fn lpuart() -> Self {
        Self { low_power: true }
    }
}

impl SignalWriter for UartWriter {
    fn signal_index(&self, function: &PeripheralFunction) -> Option<usize> {
        let table = if self.low_power {
            LPUART_SIGNALS
        } else {
            UART_SIGNALS
        };
        lookup_index(table, &function.signal)
    }

    fn group_name(&self) -> &'static str {
        if self.low_power {
            "LPUART_Group"
        } else {
            "UART_Group"
        }
    }

    fn group_title(&self) -> &'static str {
        if self.low_power {
            "LPUART, Low Power Universal Asynchronous Receiver/Transmitter"
        } else {
            "UART, Universal Asynchronous Receiver/Transmitter"
        }
    }

    fn group_brief(&self) -> Option<&'static str> {
        Some("Pins used for UART functions")
    }
}
