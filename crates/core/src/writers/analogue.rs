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
    static ref ADC_CHANNEL: Regex = Regex::new(r"(SE)?(\d+)(a|b)?").unwrap();
    static ref CMP_INPUT: Regex = Regex::new(r"IN(\d+)").unwrap();
    static ref TSI_CHANNEL: Regex = Regex::new(r"CH(\d+)").unwrap();
}

const VREF_SIGNALS: &[&[&str]] = &[&["OUT"]];

/// Comparator output slot, after the eight inputs.
pub const CMP_OUTPUT_INDEX: usize = 8;

/// ADC single-ended channels. `SE4`, `SE4a` and `SE4b` all land in slot 4;
/// the `a` variants live in their own template.
#[derive(Debug, Default)]
pub struct AdcWriter;

impl SignalWriter for AdcWriter {
    fn signal_index(&self, function: &PeripheralFunction) -> Option<usize> {
        captured_index(&ADC_CHANNEL, &function.signal, 2)
    }

    fn group_name(&self) -> &'static str {
        "AnalogueIO_Group"
    }

    fn group_title(&self) -> &'static str {
        "Analogue Input"
    }

    fn group_brief(&self) -> Option<&'static str> {
        Some("Allows use of port pins as analogue inputs")
    }
}

/// Analogue comparator inputs `IN0..IN7` and output `OUT`.
#[derive(Debug, Default)]
pub struct CmpWriter;

impl SignalWriter for CmpWriter {
    fn signal_index(&self, function: &PeripheralFunction) -> Option<usize> {
        if function.signal == "OUT" {
            return Some(CMP_OUTPUT_INDEX);
        }
        captured_index(&CMP_INPUT, &function.signal, 1)
    }

    fn uses_aliases(&self, _pin: &Pin) -> bool {
        false
    }

    fn group_name(&self) -> &'static str {
        "CMP_Group"
    }

    fn group_title(&self) -> &'static str {
        "CMP, Analogue Comparator"
    }

    fn group_brief(&self) -> Option<&'static str> {
        Some("Pins used for Analogue Comparator")
    }
}

/// Touch sense channels `CH0..CHn`.
#[derive(Debug, Default)]
pub struct TsiWriter;

impl SignalWriter for TsiWriter {
    fn signal_index(&self, function: &PeripheralFunction) -> Option<usize> {
        captured_index(&TSI_CHANNEL, &function.signal, 1)
    }

    fn uses_aliases(&self, _pin: &Pin) -> bool {
        false
    }

    fn group_name(&self) -> &'static str {
        "TSI_Group"
    }

    fn group_title(&self) -> &'static str {
        "TSI, Touch Sense Interface"
    }

    fn group_brief(&self) -> Option<&'static str> {
        Some("Pins used for Touch Sense Interface")
    }
}

/// Voltage reference output.
#[derive(Debug, Default)]
pub struct VrefWriter;

impl SignalWriter for VrefWriter {
    fn signal_index(&self, function: &PeripheralFunction) -> Option<usize> {
        lookup_index(VREF_SIGNALS, &function.signal)
    }

    fn uses_aliases(&self, _pin: &Pin) -> bool {
        false
    }

    fn group_name(&self) -> &'static str {
        "VREF_Group"
    }

    fn group_title(&self) -> &'static str {
        "VREF, Voltage Reference"
    }

    fn group_brief(&self) -> Option<&'static str> {
        Some("Pins used for Voltage Reference")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use muxgen_ir::PeripheralId;

    fn signal(s: &str) -> PeripheralFunction {
        PeripheralFunction::new(format!("X0_{}", s), PeripheralId::new(1), s)
    }

    #[test]
    fn test_adc_indices() {
        assert_eq!(AdcWriter.signal_index(&signal("SE4")), Some(4));
        assert_eq!(AdcWriter.signal_index(&signal("SE4b")), Some(4));
        assert_eq!(AdcWriter.signal_index(&signal("SE23")), Some(23));
        assert_eq!(AdcWriter.signal_index(&signal("DP0")), None);
    }

    #[test]
    fn test_cmp_indices() {
        assert_eq!(CmpWriter.signal_index(&signal("IN3")), Some(3));
        assert_eq!(CmpWriter.signal_index(&signal("OUT")), Some(CMP_OUTPUT_INDEX));
        assert_eq!(CmpWriter.signal_index(&signal("OUT1")), None);
    }

    #[test]
    fn test_tsi_and_vref() {
        assert_eq!(TsiWriter.signal_index(&signal("CH15")), Some(15));
        assert_eq!(VrefWriter.signal_index(&signal("OUT")), Some(0));
        assert!(!VrefWriter.uses_aliases(&Pin::new("PTA1")));
    }
}
