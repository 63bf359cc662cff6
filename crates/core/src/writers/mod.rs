// Muxgen - Pin Mapping Table Generator
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

//! One [`SignalWriter`](crate::SignalWriter) per peripheral family.

use crate::template::PeripheralTemplate;
use regex::Regex;
use std::fmt::Write;

pub mod analogue;
pub mod comms;
pub mod digital;
pub mod system;
pub mod timer;

pub use analogue::{AdcWriter, CmpWriter, TsiWriter, VrefWriter};
pub use comms::{I2cWriter, SpiWriter, UartWriter};
pub use digital::DigitalIoWriter;
pub use system::{DmaMuxWriter, LlwuWriter, MiscWriter};
pub use timer::{LptmrWriter, PitWriter, PwmWriter};

/// Reads capture group `group` of a full match of `re` against `signal` as an index.
pub(crate) fn captured_index(re: &Regex, signal: &str, group: usize) -> Option<usize> {
    let caps = re.captures(signal)?;
    let whole = caps.get(0)?;
    if whole.start() != 0 || whole.end() != signal.len() {
        return None;
    }
    caps.get(group)?.as_str().parse().ok()
}

/// Position of `signal` in a fixed table of names.
pub(crate) fn lookup_index(table: &[&[&str]], signal: &str) -> Option<usize> {
    table
        .iter()
        .position(|aliases| aliases.contains(&signal))
}

/// Clock mask, clock register and IRQ constants shared by every family.
pub fn clock_and_irq_constants(template: &PeripheralTemplate) -> String {
    let mut out = String::new();
    if let Some(mask) = template.clock_mask() {
        let _ = write!(
            out,
            "   //! Clock mask for peripheral\n   static constexpr uint32_t clockMask = {};\n\n",
            mask
        );
    }
    if let Some(reg) = template.clock_reg() {
        let _ = write!(
            out,
            "   //! Address of clock register for peripheral\n   static constexpr uint32_t clockReg  = SIM_BasePtr+offsetof(SIM_Type,{});\n\n",
            reg
        );
    }
    if let Some(irqs) = template.irq_nums_as_initialiser() {
        let _ = write!(
            out,
            "   //! Number of IRQs for hardware\n   static constexpr uint32_t irqCount  = {};\n\n",
            template.irq_count()
        );
        let _ = write!(
            out,
            "   //! IRQ numbers for hardware\n   static constexpr IRQn_Type irqNums[]  = {{{}}};\n\n",
            irqs
        );
    }
    out
}

/// Base pointer, PCR value and clock/IRQ constants.
pub fn default_info_constants(template: &PeripheralTemplate) -> String {
    let mut out = format!(
        "   //! Hardware base pointer\n   static constexpr uint32_t basePtr   = {}_BasePtr;\n\n",
        template.peripheral_name()
    );
    out.push_str(
        "   //! Base value for PCR (excluding MUX value)\n   static constexpr uint32_t pcrValue  = DEFAULT_PCR;\n\n",
    );
    out.push_str(&clock_and_irq_constants(template));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::PeripheralTemplate;

    #[test]
    fn test_captured_index_requires_full_match() {
        let re = Regex::new(r"CH(\d+)").unwrap();
        assert_eq!(captured_index(&re, "CH12", 1), Some(12));
        assert_eq!(captured_index(&re, "CH12x", 1), None);
        assert_eq!(captured_index(&re, "xCH1", 1), None);
    }

    #[test]
    fn test_default_info_constants() {
        let mut template = PeripheralTemplate::with_pattern(
            "Adc0",
            "ADC0",
            Some(r"(ADC)(0)_(SE\d+)b?"),
            Box::new(AdcWriter),
        )
        .unwrap();
        template.set_clock_info("SCGC6", "SIM_SCGC6_ADC0_MASK");
        template.add_irq_num("ADC0_IRQn");

        let text = default_info_constants(&template);
        assert!(text.contains("basePtr   = ADC0_BasePtr;"));
        assert!(text.contains("pcrValue  = DEFAULT_PCR;"));
        assert!(text.contains("clockMask = SIM_SCGC6_ADC0_MASK;"));
        assert!(text.contains("clockReg  = SIM_BasePtr+offsetof(SIM_Type,SCGC6);"));
        assert!(text.contains("irqCount  = 1;"));
        assert!(text.contains("irqNums[]  = {ADC0_IRQn};"));
    }

    #[test]
    fn test_constants_omit_unknown_clock() {
        let template = PeripheralTemplate::with_pattern(
            "Adc0",
            "ADC0",
            Some(r"(ADC)(0)_(SE\d+)b?"),
            Box::new(AdcWriter),
        )
        .unwrap();
        let text = default_info_constants(&template);
        assert!(!text.contains("clockMask"));
        assert!(!text.contains("irqNums"));
    }
}
