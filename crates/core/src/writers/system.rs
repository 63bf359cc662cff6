// Muxgen - Pin Mapping Table Generator
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use super::{captured_index, lookup_index};
use crate::SignalWriter;
use lazy_static::lazy_static;
use muxgen_ir::{PeripheralFunction, Pin};
use regex::Regex;

lazy_static! {
    static ref LLWU_INPUT: Regex = Regex::new(r"P(\d+)").unwrap();
}

const DMAMUX_SIGNALS: &[&[&str]] = &[&["OUT"]];

/// DMA channel multiplexer. Its only signal is the trigger output.
#[derive(Debug, Default)]
pub struct DmaMuxWriter;

impl SignalWriter for DmaMuxWriter {
    fn signal_index(&self, function: &PeripheralFunction) -> Option<usize> {
        lookup_index(DMAMUX_SIGNALS, &function.signal)
    }

    fn needs_info_class(&self) -> bool {
        false
    }

    fn uses_aliases(&self, _pin: &Pin) -> bool {
        false
    }

    fn group_name(&self) -> &'static str {
        "DMA_Group"
    }

    fn group_title(&self) -> &'static str {
        "Direct Memory Access (DMA)"
    }

    fn group_brief(&self) -> Option<&'static str> {
        Some("Pins used Direct Memory Access (DMA)")
    }
}

/// Low-leakage wake-up unit inputs `Pn`.
#[derive(Debug, Default)]
pub struct LlwuWriter;

impl SignalWriter for LlwuWriter {
    fn signal_index(&self, function: &PeripheralFunction) -> Option<usize> {
        captured_index(&LLWU_INPUT, &function.signal, 1)
    }

    fn uses_aliases(&self, _pin: &Pin) -> bool {
        false
    }

    fn group_name(&self) -> &'static str {
        "LLWU_Group"
    }

    fn group_title(&self) -> &'static str {
        "LLWU, Low-leakage Wake-up Unit"
    }

    fn group_brief(&self) -> Option<&'static str> {
        Some("Pins used for Low-leakage Wake-up Unit")
    }
}

/// Catch-all family. Functions are attached without a slot.
#[derive(Debug, Default)]
pub struct MiscWriter;

impl SignalWriter for MiscWriter {
    fn signal_index(&self, _function: &PeripheralFunction) -> Option<usize> {
        None
    }

    fn needs_info_class(&self) -> bool {
        false
    }

    fn uses_aliases(&self, _pin: &Pin) -> bool {
        false
    }

    fn group_name(&self) -> &'static str {
        "Miscellaneous_Group"
    }

    fn group_title(&self) -> &'static str {
        "Miscellaneous"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use muxgen_ir::PeripheralId;

    #[test]
    fn test_indices() {
        let out = PeripheralFunction::new("DMAMUX0_OUT", PeripheralId::new(1), "OUT");
        assert_eq!(DmaMuxWriter.signal_index(&out), Some(0));
        let p5 = PeripheralFunction::new("LLWU_P5", PeripheralId::new(2), "P5");
        assert_eq!(LlwuWriter.signal_index(&p5), Some(5));
        assert_eq!(MiscWriter.signal_index(&p5), None);
    }
}
