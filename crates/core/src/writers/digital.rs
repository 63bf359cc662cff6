// Muxgen - Pin Mapping Table Generator
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use super::{captured_index, clock_and_irq_constants};
use crate::template::PeripheralTemplate;
use crate::SignalWriter;
use lazy_static::lazy_static;
use muxgen_ir::PeripheralFunction;
use regex::Regex;

lazy_static! {
    static ref GPIO_BIT: Regex = Regex::new(r"(\d+).*").unwrap();
}

/// GPIO ports. Signal `GPIOC_5` lands in slot 5 of template `GpioC`.
#[derive(Debug, Default)]
pub struct DigitalIoWriter;

impl SignalWriter for DigitalIoWriter {
    fn signal_index(&self, function: &PeripheralFunction) -> Option<usize> {
        captured_index(&GPIO_BIT, &function.signal, 1)
    }

    fn needs_info_class(&self) -> bool {
        false
    }

    fn group_name(&self) -> &'static str {
        "DigitalIO_Group"
    }

    fn group_title(&self) -> &'static str {
        "Digital Input/Output"
    }

    fn group_brief(&self) -> Option<&'static str> {
        Some("Allows use of port pins as simple digital inputs or outputs")
    }

    fn info_constants(&self, template: &PeripheralTemplate) -> String {
        let port = template.peripheral_name();
        let mut out = format!(
            "   //! PORT Hardware base pointer\n   static constexpr uint32_t pcrAddress   = {}_BasePtr;\n\n",
            port
        );
        out.push_str(&format!(
            "   //! GPIO Hardware base pointer\n   static constexpr uint32_t gpioAddress   = {}_BasePtr;\n\n",
            port.replace("PORT", "GPIO")
        ));
        out.push_str(
            "   //! Value for PCR (including MUX value)\n   static constexpr uint32_t pcrValue  = GPIO_DEFAULT_PCR;\n\n",
        );
        out.push_str(&clock_and_irq_constants(template));
        out
    }
}
