use anyhow::{anyhow, Context, Result};
use muxgen_core::{emit_info_table, Guard, PcrRecord, RecordValue, Registry, MAX_SIGNAL_INDEX};
use muxgen_ir::{DevicePackage, TemplateId};
use std::fmt::Write;

const NAMESPACE: &str = "USBDM";
const TABLE_GROUP: &str = "PeripheralPinTables";
const TABLE_GROUP_TITLE: &str = "Peripheral Information Classes";
const TABLE_GROUP_BRIEF: &str = "Provides instance specific information about a peripheral";

/// Renders the `info[]` table and surrounding class of one template.
pub struct InfoClassGenerator;

impl InfoClassGenerator {
    pub fn generate(
        registry: &Registry,
        template: TemplateId,
        package: &DevicePackage,
    ) -> Result<String> {
        let entry = registry
            .template(template)
            .ok_or_else(|| anyhow!("unknown template {}", template))?;
        let writer = entry.writer();

        let mut out = String::new();
        write!(
            out,
            "/**\n * Peripheral information for {}\n */\nclass {}Info {{\npublic:\n",
            writer.group_title(),
            entry.base_name()
        )?;
        out.push_str(&writer.info_constants(entry));

        if entry.needs_pcr_info_table() {
            let records = emit_info_table(registry, template, package)
                .with_context(|| format!("emitting PCR table for {}", entry.base_name()))?;
            out.push_str("   //! Information for each pin of peripheral\n");
            write!(
                out,
                "   static constexpr PcrInfo  info[{}] = {{\n\n",
                MAX_SIGNAL_INDEX + 1
            )?;
            out.push_str(
                "         //          clockMask         pcrAddress      gpioAddress gpioBit muxValue\n",
            );
            out.push_str(&Self::render_records(&records));
            out.push_str("   };\n");
        }
        out.push_str("};\n\n");
        out.push_str(&writer.extra_definitions(entry));
        Ok(out)
    }

    /// Turns emitted records into initializer lines and preprocessor guards.
    pub fn render_records(records: &[PcrRecord]) -> String {
        let mut out = String::new();
        for record in records {
            match &record.guard {
                Guard::Choice { choice: 1, condition } => {
                    let _ = writeln!(out, "#if ({})", condition);
                }
                Guard::Choice { condition, .. } => {
                    let _ = writeln!(out, "#elif ({})", condition);
                }
                Guard::Otherwise => out.push_str("#else\n"),
                Guard::Always => {}
            }
            match &record.value {
                RecordValue::Placeholder => {
                    let _ = writeln!(out, "         /* {:2} */  {{ 0, 0, 0, 0, 0 }},", record.index);
                }
                RecordValue::Pin { tuple, mux } => {
                    let _ = writeln!(
                        out,
                        "         /* {:2} */  {{ {}{} }},",
                        record.index,
                        tuple.render(),
                        mux
                    );
                }
            }
            if record.guard == Guard::Otherwise {
                out.push_str("#endif\n");
            }
        }
        out
    }
}

/// Header file metadata.
#[derive(Debug, Clone)]
pub struct HeaderOptions {
    pub file_name: String,
    pub description: String,
    pub version: String,
    pub brief: String,
}

impl HeaderOptions {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            description: "Pin declarations".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            brief: "Peripheral pin tables".to_string(),
        }
    }

    fn include_guard(&self) -> String {
        format!("PROJECT_HEADERS_{}", self.file_name.to_uppercase())
            .replace(['.', '-'], "_")
    }
}

/// Renders a complete pin mapping header for one package.
pub struct HeaderGenerator;

impl HeaderGenerator {
    /// Renders the header for the package bonded to `device`.
    pub fn generate_for_device(
        registry: &Registry,
        device: &str,
        options: &HeaderOptions,
    ) -> Result<String> {
        let info = registry
            .find_device(device)
            .ok_or_else(|| anyhow!("unknown device {}", device))?;
        let package = registry
            .find_device_package(&info.package)
            .ok_or_else(|| anyhow!("device {} references unknown package {}", device, info.package))?;
        Self::generate(registry, package, options)
    }

    pub fn generate(
        registry: &Registry,
        package: &DevicePackage,
        options: &HeaderOptions,
    ) -> Result<String> {
        let guard = options.include_guard();
        let mut out = String::new();
        write!(
            out,
            "/**\n * @file      {} {}\n * @version   {}\n * @brief     {}\n */\n\n#ifndef {}\n#define {}\n\n",
            options.file_name, options.description, options.version, options.brief, guard, guard
        )?;
        write!(out, "namespace {} {{\n\n", NAMESPACE)?;

        out.push_str("/*\n * Peripheral Pin Tables\n */\n");
        write!(
            out,
            "/**\n * @addtogroup {} {}\n * @brief {}\n * @{{\n */\n",
            TABLE_GROUP, TABLE_GROUP_TITLE, TABLE_GROUP_BRIEF
        )?;
        for (id, template) in registry.templates() {
            if template.class_is_used() {
                out.push_str(&InfoClassGenerator::generate(registry, id, package)?);
            }
        }
        write!(out, "/**\n * @}}\n ** {}\n */\n", TABLE_GROUP)?;

        let aliases = Self::pin_aliases(registry, package);
        if !aliases.is_empty() {
            out.push_str("\n/*\n * Pin aliases\n */\n");
            out.push_str(&aliases);
        }

        write!(out, "\n}} // End namespace {}\n", NAMESPACE)?;
        write!(out, "\n#endif /* {} */\n", guard)?;
        Ok(out)
    }

    /// `using gpio_A5 = GpioA<5>;` for every bonded pin carrying a function
    /// whose family renders aliases for it.
    fn pin_aliases(registry: &Registry, package: &DevicePackage) -> String {
        let mut out = String::new();
        for id in registry.pins() {
            let Some(pin) = registry.pin(id) else { continue };
            if package.location(&pin.name).is_none() {
                continue;
            }
            let (Some(port_pin), Some(class)) = (pin.port_pin, pin.gpio_class()) else {
                continue;
            };
            let aliased = registry
                .mappings_for_pin(id)
                .flat_map(|m| m.functions.iter())
                .filter_map(|&f| registry.function(f)?.template)
                .filter_map(|t| registry.template(t))
                .any(|t| t.uses_aliases(pin));
            if aliased {
                let _ = writeln!(out, "using gpio_{}{} = {};", port_pin.port, port_pin.number, class);
            }
        }
        out
    }
}
