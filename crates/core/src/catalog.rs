// Muxgen - Pin Mapping Table Generator
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

//! The built-in template catalog.
//!
//! Resolution is first-match in registration order, so the order below is
//! significant: the ADC `b`/plain template precedes the `a` template, and
//! the catch-all family is always last.

use crate::error::Result;
use crate::registry::{Registry, MISC_TEMPLATE};
use crate::template::PeripheralTemplate;
use crate::writers::{
    AdcWriter, CmpWriter, DigitalIoWriter, DmaMuxWriter, I2cWriter, LlwuWriter, LptmrWriter,
    MiscWriter, PitWriter, PwmWriter, SpiWriter, TsiWriter, UartWriter, VrefWriter,
};
use crate::SignalWriter;
use tracing::debug;

/// GPIO ports known to the catalog.
pub const GPIO_PORTS: &[char] = &['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I'];

const ANALOGUE_INSTANCES: u32 = 4;
const SERIAL_INSTANCES: u32 = 6;

impl Registry {
    /// Registers the built-in templates for this registry's device family.
    pub fn initialise_templates(&mut self) -> Result<()> {
        for port in GPIO_PORTS {
            self.register(
                format!("Gpio{}", port),
                format!("PORT{}", port),
                Some(format!(r"\s*(GPIO)({})_(\d+)\s*", port)),
                Box::new(DigitalIoWriter),
            )?;
        }

        if self.family().has_standard_peripherals() {
            self.initialise_standard_templates()?;
        }

        self.register(MISC_TEMPLATE.into(), "MISC".into(), None, Box::new(MiscWriter))?;
        debug!("Registered {} templates", self.templates().count());
        Ok(())
    }

    fn initialise_standard_templates(&mut self) -> Result<()> {
        for n in 0..ANALOGUE_INSTANCES {
            self.register(
                format!("Adc{}", n),
                format!("ADC{}", n),
                Some(format!(r"(ADC)({})_(SE\d+)b?", n)),
                Box::new(AdcWriter),
            )?;
            self.register(
                format!("Adc{}a", n),
                format!("ADC{}", n),
                Some(format!(r"(ADC)({})_(SE\d+)a", n)),
                Box::new(AdcWriter),
            )?;
        }
        for n in 0..ANALOGUE_INSTANCES {
            self.register(
                format!("Cmp{}", n),
                format!("CMP{}", n),
                Some(format!(r"(CMP)({})_(IN\d)", n)),
                Box::new(CmpWriter),
            )?;
        }
        self.register("DmaMux0".into(), "DMAMUX0".into(), None, Box::new(DmaMuxWriter))?;
        for n in 0..ANALOGUE_INSTANCES {
            self.register(
                format!("Ftm{}", n),
                format!("FTM{}", n),
                Some(format!(r"(FTM)({})_(CH\d+|QD_PH[A|B]|FLT\d|CLKIN\d)", n)),
                Box::new(PwmWriter),
            )?;
        }
        for n in 0..ANALOGUE_INSTANCES {
            self.register(
                format!("I2c{}", n),
                format!("I2C{}", n),
                Some(format!(r"(I2C)({})_(SCL|SDA|4WSCLOUT|4WSDAOUT)", n)),
                Box::new(I2cWriter),
            )?;
        }
        self.register(
            "Lptmr0".into(),
            "LPTMR0".into(),
            Some(r"(LPTMR)(0)_(ALT\d+)".into()),
            Box::new(LptmrWriter),
        )?;
        self.register("Pit".into(), "PIT".into(), Some(r"(PIT)()(\d+)".into()), Box::new(PitWriter))?;
        self.register(
            "Llwu".into(),
            "LLWU".into(),
            Some(r"(LLWU)()_(P\d+)".into()),
            Box::new(LlwuWriter),
        )?;
        for n in 0..ANALOGUE_INSTANCES {
            self.register(
                format!("Spi{}", n),
                format!("SPI{}", n),
                Some(format!(r"(SPI)({})_(SCK|SIN|SOUT|MISO|MOSI|SS|PCS\d*)", n)),
                Box::new(SpiWriter),
            )?;
        }
        for n in 0..ANALOGUE_INSTANCES {
            self.register(
                format!("Tpm{}", n),
                format!("TPM{}", n),
                Some(format!(r"(TPM)({})_(CH\d+|QD_PH[A|B])", n)),
                Box::new(PwmWriter),
            )?;
        }
        for n in 0..ANALOGUE_INSTANCES {
            self.register(
                format!("Tsi{}", n),
                format!("TSI{}", n),
                Some(format!(r"(TSI)({})_(CH\d+)", n)),
                Box::new(TsiWriter),
            )?;
        }
        for n in 0..SERIAL_INSTANCES {
            self.register(
                format!("Uart{}", n),
                format!("UART{}", n),
                Some(format!(r"(UART)({})_(TX|RX|CTS_b|RTS_b|COL_b)", n)),
                Box::new(UartWriter::uart()),
            )?;
        }
        for n in 0..SERIAL_INSTANCES {
            self.register(
                format!("Lpuart{}", n),
                format!("LPUART{}", n),
                Some(format!(r"(LPUART)({})_(TX|RX|CTS_b|RTS_b)", n)),
                Box::new(UartWriter::lpuart()),
            )?;
        }
        self.register(
            "Vref".into(),
            "VREF".into(),
            Some(r"(VREF)()_(OUT)".into()),
            Box::new(VrefWriter),
        )?;
        Ok(())
    }

    fn register(
        &mut self,
        base_name: String,
        peripheral_name: String,
        pattern: Option<String>,
        writer: Box<dyn SignalWriter>,
    ) -> Result<()> {
        let template =
            PeripheralTemplate::with_pattern(base_name, peripheral_name, pattern.as_deref(), writer)?;
        self.add_template(template)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use muxgen_ir::DeviceFamily;

    #[test]
    fn test_catalog_order() {
        let mut registry = Registry::new(DeviceFamily::Mk);
        registry.initialise_templates().unwrap();
        let names: Vec<&str> = registry.templates().map(|(_, t)| t.base_name()).collect();
        assert_eq!(names.first(), Some(&"GpioA"));
        assert_eq!(names[9], "Adc0");
        assert_eq!(names[10], "Adc0a");
        assert_eq!(names.last(), Some(&"Misc"));
        assert!(names.iter().position(|n| *n == "Ftm0") < names.iter().position(|n| *n == "Tpm0"));
    }

    #[test]
    fn test_reduced_family_catalog() {
        let mut registry = Registry::new(DeviceFamily::Mkm);
        registry.initialise_templates().unwrap();
        assert_eq!(registry.templates().count(), GPIO_PORTS.len() + 1);
    }

    #[test]
    fn test_initialise_twice_fails() {
        let mut registry = Registry::new(DeviceFamily::Mk);
        registry.initialise_templates().unwrap();
        assert!(registry.initialise_templates().is_err());
    }
}
