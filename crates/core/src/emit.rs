// Muxgen - Pin Mapping Table Generator
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

//! Per-package PCR initializer records for one template.
//!
//! For every function slot the emitter decides which pin placements are
//! electrically selectable and bonded out on the package, and yields one
//! guarded record per placement followed by an unconditional fallback.

use crate::error::{RegistryError, Result};
use crate::registry::Registry;
use muxgen_ir::{DevicePackage, FunctionId, ModelError, Pin, TemplateId};
use serde::Serialize;
use tracing::debug;

/// Port information of a pin as rendered into a `PcrInfo` initializer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PcrTuple {
    /// Pin without a decoded port, e.g. an analogue-only pin.
    NoPort,
    Port {
        clock_mask: String,
        port_base: String,
        gpio_base: String,
        gpio_bit: u32,
    },
}

impl PcrTuple {
    /// Builds the tuple for `pin`. A missing pin is a precondition violation.
    pub fn for_pin(pin: Option<&Pin>) -> Result<Self> {
        let pin = pin.ok_or_else(|| ModelError::InvalidPrecondition("Pin may not be null".into()))?;
        let Some(port_pin) = pin.port_pin else {
            return Ok(PcrTuple::NoPort);
        };
        Ok(PcrTuple::Port {
            clock_mask: pin.clock_mask().unwrap_or_default(),
            port_base: pin.port_base_ptr().unwrap_or_default(),
            gpio_base: pin.gpio_base_ptr().unwrap_or_default(),
            gpio_bit: port_pin.number,
        })
    }

    /// Initializer text without the trailing mux value, e.g.
    /// `PORTC_CLOCK_MASK, PORTC_BasePtr,  GPIOC_BasePtr,  1,   `.
    pub fn render(&self) -> String {
        match self {
            PcrTuple::NoPort => "0, 0, 0, 0, ".to_string(),
            PcrTuple::Port {
                clock_mask,
                port_base,
                gpio_base,
                gpio_bit,
            } => format!(
                "{:<17} {:<15} {:<15} {:<4}",
                format!("{},", clock_mask),
                format!("{},", port_base),
                format!("{},", gpio_base),
                format!("{},", gpio_bit)
            ),
        }
    }
}

/// Preprocessor condition a record is compiled under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Guard {
    /// `#if`/`#elif (condition)`; `choice` counts from 1.
    Choice { choice: usize, condition: String },
    /// The `#else` branch after at least one choice.
    Otherwise,
    /// No surrounding conditional.
    Always,
}

impl Guard {
    fn choice(function: &str, choice: usize) -> Self {
        Guard::Choice {
            choice,
            condition: format!("{}_PIN_SEL == {}", function, choice),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecordValue {
    /// All-zero `{ 0, 0, 0, 0, 0 }` record.
    Placeholder,
    Pin { tuple: PcrTuple, mux: u8 },
}

/// One entry of a template's `info[]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PcrRecord {
    pub index: usize,
    pub guard: Guard,
    pub value: RecordValue,
}

impl PcrRecord {
    fn placeholder(index: usize, guard: Guard) -> Self {
        Self {
            index,
            guard,
            value: RecordValue::Placeholder,
        }
    }
}

/// Emits the records of template `template` for `package`, slot by slot.
pub fn emit_info_table(
    registry: &Registry,
    template: TemplateId,
    package: &DevicePackage,
) -> Result<Vec<PcrRecord>> {
    let entry = registry
        .template(template)
        .ok_or_else(|| RegistryError::UnknownTemplate(template.to_string()))?;

    let mut records = Vec::new();
    for (index, slot) in entry.functions().iter().enumerate() {
        match slot {
            None => records.push(PcrRecord::placeholder(index, Guard::Always)),
            Some(function) => emit_slot(registry, index, *function, package, &mut records)?,
        }
    }
    debug!(
        "{} records for {} in package {}",
        records.len(),
        entry.base_name(),
        package.name
    );
    Ok(records)
}

fn emit_slot(
    registry: &Registry,
    index: usize,
    function: FunctionId,
    package: &DevicePackage,
    records: &mut Vec<PcrRecord>,
) -> Result<()> {
    let name = registry
        .function(function)
        .map(|f| f.name.as_str())
        .ok_or_else(|| RegistryError::UnknownFunction(function.to_string()))?;

    let mut choice = 0;
    for mapping in registry.mappings_for_function(function) {
        let Some(mux) = mapping.mux.value() else {
            continue;
        };
        let pin = registry.pin(mapping.pin);
        if let Some(pin) = pin {
            if package.location(&pin.name).is_none() {
                continue;
            }
        }
        let tuple = PcrTuple::for_pin(pin)?;
        choice += 1;
        records.push(PcrRecord {
            index,
            guard: Guard::choice(name, choice),
            value: RecordValue::Pin { tuple, mux },
        });
    }

    let guard = if choice > 0 {
        Guard::Otherwise
    } else {
        Guard::Always
    };
    records.push(PcrRecord::placeholder(index, guard));
    Ok(())
}
