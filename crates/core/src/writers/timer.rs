// Muxgen - Pin Mapping Table Generator
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use super::{captured_index, default_info_constants};
use crate::template::PeripheralTemplate;
use crate::SignalWriter;
use lazy_static::lazy_static;
use muxgen_ir::PeripheralFunction;
use regex::Regex;

lazy_static! {
    static ref TIMER_CHANNEL: Regex = Regex::new(r"CH(\d+)").unwrap();
    static ref TIMER_CLOCK: Regex = Regex::new(r"CLKIN(\d+)").unwrap();
    static ref TIMER_FAULT: Regex = Regex::new(r"FLT(\d+)").unwrap();
    static ref LPTMR_INPUT: Regex = Regex::new(r"ALT(\d+)").unwrap();
    static ref PIT_CHANNEL: Regex = Regex::new(r"(\d+)").unwrap();
}

/// First quadrature decoder slot (`QD_PHA`, then `QD_PHB`).
pub const QUAD_INDEX: usize = 8;
/// First external clock slot (`CLKIN0`, `CLKIN1`).
pub const CLOCK_INDEX: usize = 10;
/// First fault input slot (`FLT0..FLT3`).
pub const FAULT_INDEX: usize = 12;

const CLOCK_INPUTS: usize = 2;
const FAULT_INPUTS: usize = 4;

/// FTM and TPM channels plus quadrature, clock and fault inputs.
#[derive(Debug, Default)]
pub struct PwmWriter;

impl PwmWriter {
    /// Number of channels up to and including the highest populated channel slot.
    fn channel_count(template: &PeripheralTemplate) -> usize {
        template
            .functions()
            .iter()
            .take(QUAD_INDEX)
            .rposition(Option::is_some)
            .map_or(0, |last| last + 1)
    }
}

impl SignalWriter for PwmWriter {
    fn signal_index(&self, function: &PeripheralFunction) -> Option<usize> {
        let signal = function.signal.as_str();
        match signal {
            "QD_PHA" => return Some(QUAD_INDEX),
            "QD_PHB" => return Some(QUAD_INDEX + 1),
            _ => {}
        }
        if let Some(channel) = captured_index(&TIMER_CHANNEL, signal, 1) {
            return Some(channel);
        }
        if let Some(clock) = captured_index(&TIMER_CLOCK, signal, 1) {
            return (clock < CLOCK_INPUTS).then_some(CLOCK_INDEX + clock);
        }
        captured_index(&TIMER_FAULT, signal, 1)
            .filter(|&fault| fault < FAULT_INPUTS)
            .map(|fault| FAULT_INDEX + fault)
    }

    fn group_name(&self) -> &'static str {
        "PwmIO_Group"
    }

    fn group_title(&self) -> &'static str {
        "PWM, Input capture, Output compare"
    }

    fn group_brief(&self) -> Option<&'static str> {
        Some("Allows use of port pins as PWM outputs")
    }

    fn info_constants(&self, template: &PeripheralTemplate) -> String {
        let mut out = default_info_constants(template);
        out.push_str(&format!(
            "   //! Base value for tmr->SC register\n   static constexpr uint32_t scValue  = {}_SC;\n\n",
            template.peripheral_name()
        ));
        out.push_str(&format!(
            "   //! Indexes of special functions in PcrInfo[] table\n   static constexpr int QUAD_INDEX  = {};\n   static constexpr int CLOCK_INDEX = {};\n   static constexpr int FAULT_INDEX = {};\n\n",
            QUAD_INDEX, CLOCK_INDEX, FAULT_INDEX
        ));
        out.push_str(&format!(
            "   static constexpr int NUM_CHANNELS  = {};\n\n",
            Self::channel_count(template)
        ));
        out
    }

    fn extra_definitions(&self, template: &PeripheralTemplate) -> String {
        format!(
            "template<uint8_t channel> using {0} = TmrBase_T<{0}Info, channel>;\n\n",
            template.base_name()
        )
    }
}

/// Low power timer pulse inputs `ALTn`.
#[derive(Debug, Default)]
pub struct LptmrWriter;

impl SignalWriter for LptmrWriter {
    fn signal_index(&self, function: &PeripheralFunction) -> Option<usize> {
        captured_index(&LPTMR_INPUT, &function.signal, 1)
    }

    fn group_name(&self) -> &'static str {
        "LPTMR_Group"
    }

    fn group_title(&self) -> &'static str {
        "LPTMR, Low Power Timer"
    }

    fn group_brief(&self) -> Option<&'static str> {
        Some("Pins used for Low Power Timer")
    }
}

/// Periodic interrupt timer channels.
#[derive(Debug, Default)]
pub struct PitWriter;

impl SignalWriter for PitWriter {
    fn signal_index(&self, function: &PeripheralFunction) -> Option<usize> {
        captured_index(&PIT_CHANNEL, &function.signal, 1)
    }

    fn group_name(&self) -> &'static str {
        "PIT_Group"
    }

    fn group_title(&self) -> &'static str {
        "PIT, Programmable Interrupt Timer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use muxgen_ir::{FunctionId, PeripheralId};

    fn signal(s: &str) -> PeripheralFunction {
        PeripheralFunction::new(format!("FTM0_{}", s), PeripheralId::new(1), s)
    }

    #[test]
    fn test_pwm_indices() {
        let w = PwmWriter;
        assert_eq!(w.signal_index(&signal("CH0")), Some(0));
        assert_eq!(w.signal_index(&signal("CH7")), Some(7));
        assert_eq!(w.signal_index(&signal("QD_PHA")), Some(8));
        assert_eq!(w.signal_index(&signal("QD_PHB")), Some(9));
        assert_eq!(w.signal_index(&signal("CLKIN0")), Some(10));
        assert_eq!(w.signal_index(&signal("CLKIN1")), Some(11));
        assert_eq!(w.signal_index(&signal("FLT0")), Some(12));
        assert_eq!(w.signal_index(&signal("FLT3")), Some(15));
        assert_eq!(w.signal_index(&signal("FLT4")), None);
        assert_eq!(w.signal_index(&signal("CLKIN2")), None);
    }

    #[test]
    fn test_pwm_num_channels() {
        let mut template = PeripheralTemplate::with_pattern(
            "Ftm0",
            "FTM0",
            Some(r"(FTM)(0)_(CH\d+|QD_PH[A|B]|FLT\d|CLKIN\d)"),
            Box::new(PwmWriter),
        )
        .unwrap();
        template.add_function(FunctionId::new(1), &signal("CH5")).unwrap();
        template.add_function(FunctionId::new(2), &signal("FLT1")).unwrap();

        let text = PwmWriter.info_constants(&template);
        assert!(text.contains("NUM_CHANNELS  = 6;"));
        assert!(text.contains("scValue  = FTM0_SC;"));
        assert!(text.contains("QUAD_INDEX  = 8;"));
        assert_eq!(
            PwmWriter.extra_definitions(&template),
            "template<uint8_t channel> using Ftm0 = TmrBase_T<Ftm0Info, channel>;\n\n"
        );
    }

    #[test]
    fn test_lptmr_and_pit() {
        assert_eq!(LptmrWriter.signal_index(&signal("ALT2")), Some(2));
        assert_eq!(PitWriter.signal_index(&signal("3")), Some(3));
        assert_eq!(PitWriter.signal_index(&signal("CH3")), None);
    }
}
