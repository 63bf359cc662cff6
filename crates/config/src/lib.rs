// Muxgen - Pin Mapping Table Generator
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use anyhow::{Context, Result};
use muxgen_core::{Registry, RegistryError};
use muxgen_ir::{FunctionId, MuxSelection, PinId, PortPin};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// Default schema version for YAML descriptors
fn default_schema_version() -> String {
    "1.0".to_string()
}

const SUPPORTED_SCHEMA_MAJOR: &str = "1";

#[derive(Debug, thiserror::Error)]
pub enum DescriptorError {
    #[error("unsupported schema version {0}")]
    UnsupportedSchema(String),
    #[error("device {device} references undeclared package {package}")]
    UndeclaredPackage { device: String, package: String },
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DeviceEntry {
    pub name: String,
    #[serde(default)]
    pub manual: String,
    pub package: String,
}

/// One row of the pin table.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PinEntry {
    pub name: String,
    /// Functions active out of reset, `/` separated.
    #[serde(default)]
    pub reset: Option<String>,
    /// Label of the mapping selected by default.
    #[serde(default)]
    pub default: Option<String>,
    /// Mux column -> `/` separated signal names.
    #[serde(default)]
    pub mux: BTreeMap<u8, String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PeripheralEntry {
    pub name: String,
    pub clock_reg: String,
    #[serde(default)]
    pub clock_mask: Option<String>,
    #[serde(default)]
    pub irqs: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DmaEntry {
    pub instance: u32,
    pub channel: u32,
    pub source: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DeviceDescriptor {
    #[serde(default = "default_schema_version")]
    pub schema_version: String,
    /// Device name used to classify the family. Falls back to the first device.
    #[serde(default)]
    pub family: Option<String>,
    #[serde(default)]
    pub devices: Vec<DeviceEntry>,
    /// Package name -> pin name -> location. `""` means the pin name, `*` absent.
    #[serde(default)]
    pub packages: BTreeMap<String, BTreeMap<String, String>>,
    pub pins: Vec<PinEntry>,
    #[serde(default)]
    pub peripherals: Vec<PeripheralEntry>,
    #[serde(default)]
    pub dma: Vec<DmaEntry>,
}

impl DeviceDescriptor {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read device descriptor {:?}", path))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse device descriptor JSON from {:?}", path))
        } else {
            Self::from_yaml_str(&content)
        }
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse device descriptor YAML")
    }

    /// Name the device family is classified from.
    pub fn family_name(&self) -> &str {
        self.family
            .as_deref()
            .or_else(|| self.devices.first().map(|d| d.name.as_str()))
            .unwrap_or_default()
    }

    /// Structural checks that need no registry.
    pub fn validate(&self) -> std::result::Result<(), DescriptorError> {
        let major = self.schema_version.split('.').next().unwrap_or_default();
        if major != SUPPORTED_SCHEMA_MAJOR {
            return Err(DescriptorError::UnsupportedSchema(self.schema_version.clone()));
        }
        for device in &self.devices {
            if !self.packages.contains_key(&device.package) {
                return Err(DescriptorError::UndeclaredPackage {
                    device: device.name.clone(),
                    package: device.package.clone(),
                });
            }
        }
        Ok(())
    }

    /// Builds a fully populated registry: catalog, devices, pins and their
    /// mappings, package locations, peripheral clocks and DMA sources.
    pub fn populate(&self) -> Result<Registry> {
        self.validate()?;

        let mut registry = Registry::for_device(self.family_name());
        registry.initialise_templates()?;
        info!(
            "Populating {} family registry from {} pins",
            registry.family(),
            self.pins.len()
        );

        for device in &self.devices {
            registry
                .create_device_information(&device.name, &device.manual, &device.package)
                .with_context(|| format!("device {}", device.name))?;
        }

        for entry in &self.pins {
            populate_pin(&mut registry, entry).with_context(|| format!("pin {}", entry.name))?;
        }

        for (name, locations) in &self.packages {
            populate_package(&mut registry, name, locations)
                .with_context(|| format!("package {}", name))?;
        }

        for peripheral in &self.peripherals {
            let updated = registry
                .set_peripheral_clock_info(
                    &peripheral.name,
                    &peripheral.clock_reg,
                    peripheral.clock_mask.as_deref(),
                    &peripheral.irqs,
                )
                .with_context(|| format!("peripheral {}", peripheral.name))?;
            if updated == 0 && registry.find_peripheral(&peripheral.name).is_none() {
                warn!("Clock information for {} matches no template", peripheral.name);
            }
        }

        for dma in &self.dma {
            registry.create_dma_info(dma.instance, dma.channel, &dma.source);
        }

        info!(
            "Registry holds {} pins, {} functions, {} peripherals",
            registry.pins().len(),
            registry.functions().len(),
            registry.peripherals().len()
        );
        Ok(registry)
    }
}

/// Splits a `/` separated cell into signal names, renaming `PTxn` to `GPIOx_n`.
pub fn split_signals(cell: &str) -> Vec<String> {
    cell.split('/')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| match PortPin::decode(s) {
            Some(pp) => format!("GPIO{}_{}", pp.port, pp.number),
            None => s.to_string(),
        })
        .collect()
}

/// Classifies `name` through the catalog, falling back to the miscellaneous family.
pub fn resolve_signal(registry: &mut Registry, name: &str) -> Result<FunctionId> {
    match registry.find_or_create_peripheral_function(name) {
        Ok(id) => Ok(id),
        Err(RegistryError::NoMatchingTemplate(_)) => {
            debug!("{} has no template, trying miscellaneous shapes", name);
            Ok(registry.classify_miscellaneous(name)?)
        }
        Err(e) => Err(e.into()),
    }
}

fn map_cell(registry: &mut Registry, pin: PinId, cell: &str, mux: MuxSelection) -> Result<String> {
    let signals = split_signals(cell);
    for signal in &signals {
        let function = resolve_signal(registry, signal)?;
        registry.create_mapping(function, pin, mux)?;
    }
    Ok(signals.join("/"))
}

fn populate_pin(registry: &mut Registry, entry: &PinEntry) -> Result<()> {
    let pin = registry.create_pin(&entry.name)?;

    let mut mapped = false;
    for (&column, cell) in &entry.mux {
        let mux = MuxSelection::mux(column).map_err(RegistryError::from)?;
        mapped |= !map_cell(registry, pin, cell, mux)?.is_empty();
    }

    match entry.reset.as_deref().map(str::trim).filter(|r| !r.is_empty()) {
        Some(cell) => {
            let selection = if mapped {
                MuxSelection::Reset
            } else {
                MuxSelection::Fixed
            };
            let label = map_cell(registry, pin, cell, selection)?;
            registry.set_reset_peripheral_functions(pin, &label)?;
        }
        None => {
            registry.create_mapping(FunctionId::DISABLED, pin, MuxSelection::Reset)?;
            registry.set_reset_peripheral_functions(pin, muxgen_ir::function::DISABLED_NAME)?;
        }
    }

    if let Some(cell) = entry.default.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
        let label = split_signals(cell).join("/");
        registry.set_default_peripheral_functions(pin, &label)?;
    }
    Ok(())
}

fn populate_package(
    registry: &mut Registry,
    name: &str,
    locations: &BTreeMap<String, String>,
) -> Result<()> {
    for pin in locations.keys() {
        if registry.find_pin(pin).is_err() {
            warn!("Package {} lists unknown pin {}", name, pin);
        }
    }
    let package = registry.create_device_package(name)?;
    for (pin, location) in locations {
        package.add_location(pin, location);
    }
    debug!("Package {} has {} bonded pins", name, package.locations().count());
    Ok(())
}
