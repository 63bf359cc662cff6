// Muxgen - Pin Mapping Table Generator
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use crate::error::{RegistryError, Result};
use crate::misc;
use crate::template::{PeripheralTemplate, SlotError, MAX_SIGNAL_INDEX};
use lazy_static::lazy_static;
use muxgen_ir::{
    compare_names, DeviceFamily, DeviceInformation, DevicePackage, DmaInfo, FunctionId,
    MappingId, MappingInfo, ModelError, MuxSelection, NameKey, Peripheral, PeripheralFunction,
    PeripheralId, Pin, PinId, TemplateId,
};
use regex::Regex;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info};

lazy_static! {
    static ref CLOCK_REGISTER: Regex = Regex::new(r"^SIM->(SCGC\d?)$").unwrap();
}

/// Base name of the catch-all template.
pub const MISC_TEMPLATE: &str = "Misc";

/// Owner of every entity of one device run.
///
/// Lifecycle is construct, populate, query/emit, discard. Creation of a
/// duplicate name fails; lookups never create anything except through the
/// explicit `find_or_create_*` operations.
#[derive(Debug)]
pub struct Registry {
    family: DeviceFamily,

    pins: Vec<Pin>,
    pin_index: HashMap<String, PinId>,

    peripherals: Vec<Peripheral>,
    peripheral_index: HashMap<String, PeripheralId>,

    functions: Vec<PeripheralFunction>,
    function_index: HashMap<String, FunctionId>,
    functions_by_base: BTreeMap<NameKey, Vec<FunctionId>>,

    mappings: Vec<MappingInfo>,
    mappings_by_pin: HashMap<PinId, BTreeMap<MuxSelection, MappingId>>,
    mappings_by_function: HashMap<FunctionId, Vec<MappingId>>,

    templates: Vec<PeripheralTemplate>,
    template_index: HashMap<String, TemplateId>,

    devices: Vec<DeviceInformation>,
    packages: BTreeMap<String, DevicePackage>,
    dma: Vec<DmaInfo>,
}

impl Registry {
    /// Creates an empty registry. Slot 0 of the pin and function arenas holds
    /// the Disabled sentinels, which never enter the name indices.
    pub fn new(family: DeviceFamily) -> Self {
        Self {
            family,
            pins: vec![Pin::new(muxgen_ir::function::DISABLED_NAME)],
            pin_index: HashMap::new(),
            peripherals: Vec::new(),
            peripheral_index: HashMap::new(),
            functions: vec![PeripheralFunction::disabled()],
            function_index: HashMap::new(),
            functions_by_base: BTreeMap::new(),
            mappings: Vec::new(),
            mappings_by_pin: HashMap::new(),
            mappings_by_function: HashMap::new(),
            templates: Vec::new(),
            template_index: HashMap::new(),
            devices: Vec::new(),
            packages: BTreeMap::new(),
            dma: Vec::new(),
        }
    }

    /// Creates a registry classified from a device name prefix.
    pub fn for_device(name: &str) -> Self {
        Self::new(DeviceFamily::from_device_name(name))
    }

    pub fn family(&self) -> DeviceFamily {
        self.family
    }

    // ---------------------------------------------------------------- pins

    /// Creates a pin. Fails if the name exists or names the Disabled sentinel.
    pub fn create_pin(&mut self, name: &str) -> Result<PinId> {
        if PeripheralFunction::is_disabled_name(name) || self.pin_index.contains_key(name) {
            return Err(RegistryError::DuplicatePin(name.to_string()));
        }
        let id = PinId::new(self.pins.len());
        self.pins.push(Pin::new(name));
        self.pin_index.insert(name.to_string(), id);
        debug!("Created pin {}", name);
        Ok(id)
    }

    pub fn find_or_create_pin(&mut self, name: &str) -> Result<PinId> {
        match self.find_pin(name) {
            Ok(id) => Ok(id),
            Err(RegistryError::UnknownPin(_)) => self.create_pin(name),
            Err(e) => Err(e),
        }
    }

    /// Strict lookup. "Disabled" (any case) yields the sentinel.
    pub fn find_pin(&self, name: &str) -> Result<PinId> {
        if PeripheralFunction::is_disabled_name(name) {
            return Ok(PinId::DISABLED);
        }
        self.pin_index
            .get(name)
            .copied()
            .ok_or_else(|| RegistryError::UnknownPin(name.to_string()))
    }

    pub fn pin(&self, id: PinId) -> Option<&Pin> {
        self.pins.get(id.index())
    }

    fn pin_mut(&mut self, id: PinId) -> Result<&mut Pin> {
        self.pins
            .get_mut(id.index())
            .ok_or_else(|| RegistryError::UnknownPin(id.to_string()))
    }

    /// All pins except the sentinel, in alphanumeric name order.
    pub fn pins(&self) -> Vec<PinId> {
        let mut ids: Vec<PinId> = self.pin_index.values().copied().collect();
        ids.sort_by(|a, b| self.compare_pins(*a, *b));
        ids
    }

    fn compare_pins(&self, a: PinId, b: PinId) -> std::cmp::Ordering {
        let a = &self.pins[a.index()].name;
        let b = &self.pins[b.index()].name;
        NameKey::new(a.as_str()).cmp(&NameKey::new(b.as_str()))
    }

    // --------------------------------------------------------- peripherals

    /// Creates peripheral `base + instance`. Fails if it exists.
    pub fn create_peripheral(&mut self, base_name: &str, instance: &str) -> Result<PeripheralId> {
        let peripheral = Peripheral::new(base_name, instance);
        let name = peripheral.name();
        if self.peripheral_index.contains_key(&name) {
            return Err(RegistryError::DuplicatePeripheral(name));
        }
        let id = PeripheralId::new(self.peripherals.len());
        self.peripherals.push(peripheral);
        debug!("Created peripheral {}", name);
        self.peripheral_index.insert(name, id);
        Ok(id)
    }

    pub fn find_or_create_peripheral(&mut self, base_name: &str, instance: &str) -> PeripheralId {
        let name = format!("{}{}", base_name, instance);
        if let Some(&id) = self.peripheral_index.get(&name) {
            return id;
        }
        let id = PeripheralId::new(self.peripherals.len());
        self.peripherals.push(Peripheral::new(base_name, instance));
        debug!("Created peripheral {}", name);
        self.peripheral_index.insert(name, id);
        id
    }

    pub fn find_peripheral(&self, name: &str) -> Option<PeripheralId> {
        self.peripheral_index.get(name).copied()
    }

    pub fn peripheral(&self, id: PeripheralId) -> Option<&Peripheral> {
        self.peripherals.get(id.index())
    }

    /// All peripherals in alphanumeric name order.
    pub fn peripherals(&self) -> Vec<PeripheralId> {
        let sorted: BTreeMap<NameKey, PeripheralId> = self
            .peripheral_index
            .iter()
            .map(|(name, &id)| (NameKey::new(name.as_str()), id))
            .collect();
        sorted.into_values().collect()
    }

    /// Sets clock register, clock mask and IRQ numbers for every template
    /// whose peripheral name matches `name` (case-insensitive), and the clock
    /// information of peripheral `name` if it exists.
    ///
    /// `clock_reg` must look like `SIM->SCGCn`; only `SCGCn` is stored. A
    /// missing mask defaults to `SIM_SCGCn_{name}_MASK`. Returns the number
    /// of templates updated.
    pub fn set_peripheral_clock_info(
        &mut self,
        name: &str,
        clock_reg: &str,
        clock_mask: Option<&str>,
        irq_nums: &[String],
    ) -> Result<usize> {
        let clock_mask = match clock_mask.map(str::trim).filter(|m| !m.is_empty()) {
            Some(mask) => mask.to_string(),
            None => format!(
                "{}_{}_MASK",
                clock_reg.replace("->", "_"),
                name.to_ascii_uppercase()
            ),
        };
        let reg = CLOCK_REGISTER
            .captures(clock_reg.trim())
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| RegistryError::InvalidClockRegister {
                peripheral: name.to_string(),
                reg: clock_reg.to_string(),
            })?;
        if !clock_mask.contains(&reg) {
            return Err(RegistryError::ClockMaskMismatch {
                mask: clock_mask,
                reg,
            });
        }

        let mut updated = 0;
        for template in &mut self.templates {
            if template.peripheral_name().eq_ignore_ascii_case(name) {
                template.set_clock_info(reg.as_str(), clock_mask.as_str());
                for irq in irq_nums {
                    template.add_irq_num(irq.as_str());
                }
                updated += 1;
            }
        }
        let peripheral = self
            .find_peripheral(name)
            .or_else(|| self.find_peripheral(&name.to_ascii_uppercase()));
        if let Some(id) = peripheral {
            self.peripherals[id.index()].set_clock_info(reg.as_str(), clock_mask.as_str())?;
        }
        debug!("Clock info for {}: {} {} ({} templates)", name, reg, clock_mask, updated);
        Ok(updated)
    }

    // ----------------------------------------------------------- functions

    /// Creates a function under peripheral `base + instance`. Fails if the name exists.
    pub fn create_peripheral_function(
        &mut self,
        name: &str,
        base_name: &str,
        instance: &str,
        signal: &str,
    ) -> Result<FunctionId> {
        if PeripheralFunction::is_disabled_name(name) || self.function_index.contains_key(name) {
            return Err(RegistryError::DuplicateFunction(name.to_string()));
        }
        let peripheral = self.find_or_create_peripheral(base_name, instance);
        let id = FunctionId::new(self.functions.len());
        self.functions
            .push(PeripheralFunction::new(name, peripheral, signal));
        self.function_index.insert(name.to_string(), id);
        self.functions_by_base
            .entry(NameKey::new(base_name))
            .or_default()
            .push(id);
        debug!("Created function {} ({} {} {})", name, base_name, instance, signal);
        Ok(id)
    }

    /// Returns the sentinel for "Disabled", an existing function by name, or
    /// classifies the name through the template catalog in registration order.
    pub fn find_or_create_peripheral_function(&mut self, name: &str) -> Result<FunctionId> {
        if PeripheralFunction::is_disabled_name(name) {
            return Ok(FunctionId::DISABLED);
        }
        if let Some(&id) = self.function_index.get(name) {
            return Ok(id);
        }
        for index in 0..self.templates.len() {
            let template = TemplateId::new(index);
            if let Some(id) = self.apply_template(template, name)? {
                let function = &mut self.functions[id.index()];
                function.included = true;
                function.template = Some(template);
                debug!("{} classified by {}", name, self.templates[index].base_name());
                return Ok(id);
            }
        }
        Err(RegistryError::NoMatchingTemplate(name.to_string()))
    }

    /// Strict lookup; never classifies.
    pub fn find_peripheral_function(&self, name: &str) -> Result<FunctionId> {
        if PeripheralFunction::is_disabled_name(name) {
            return Ok(FunctionId::DISABLED);
        }
        self.function_index
            .get(name)
            .copied()
            .ok_or_else(|| RegistryError::UnknownFunction(name.to_string()))
    }

    /// Attaches `name` to the catch-all template using the miscellaneous shapes.
    ///
    /// An existing function is returned unchanged.
    pub fn classify_miscellaneous(&mut self, name: &str) -> Result<FunctionId> {
        if let Ok(id) = self.find_peripheral_function(name) {
            return Ok(id);
        }
        let template = self
            .find_template(MISC_TEMPLATE)
            .ok_or_else(|| RegistryError::UnknownTemplate(MISC_TEMPLATE.to_string()))?;
        let parts =
            misc::decompose(name).ok_or_else(|| RegistryError::NoMatchingTemplate(name.to_string()))?;
        let id =
            self.create_peripheral_function(name, &parts.base_name, &parts.instance, &parts.signal)?;
        self.templates[template.index()].add_unindexed(id);
        let function = &mut self.functions[id.index()];
        function.included = true;
        function.template = Some(template);
        debug!("{} classified as miscellaneous", name);
        Ok(id)
    }

    pub fn function(&self, id: FunctionId) -> Option<&PeripheralFunction> {
        self.functions.get(id.index())
    }

    fn function_name(&self, id: FunctionId) -> String {
        self.function(id)
            .map(|f| f.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    /// All functions except the sentinel, in alphanumeric name order.
    pub fn functions(&self) -> Vec<FunctionId> {
        let sorted: BTreeMap<NameKey, FunctionId> = self
            .function_index
            .iter()
            .map(|(name, &id)| (NameKey::new(name.as_str()), id))
            .collect();
        sorted.into_values().collect()
    }

    /// Every function created with peripheral base name `base_name`, in creation order.
    pub fn functions_by_base_name(&self, base_name: &str) -> &[FunctionId] {
        self.functions_by_base
            .get(&NameKey::new(base_name))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Base names in alphanumeric order.
    pub fn base_names(&self) -> impl Iterator<Item = &str> {
        self.functions_by_base.keys().map(NameKey::as_str)
    }

    // ----------------------------------------------------------- templates

    /// Appends a template to the catalog. Resolution order is registration order.
    pub fn add_template(&mut self, template: PeripheralTemplate) -> Result<TemplateId> {
        if self.template_index.contains_key(template.base_name()) {
            return Err(RegistryError::DuplicateTemplate(
                template.base_name().to_string(),
            ));
        }
        let id = TemplateId::new(self.templates.len());
        self.template_index
            .insert(template.base_name().to_string(), id);
        self.templates.push(template);
        Ok(id)
    }

    pub fn find_template(&self, base_name: &str) -> Option<TemplateId> {
        self.template_index.get(base_name).copied()
    }

    pub fn template(&self, id: TemplateId) -> Option<&PeripheralTemplate> {
        self.templates.get(id.index())
    }

    /// Templates in registration order.
    pub fn templates(&self) -> impl Iterator<Item = (TemplateId, &PeripheralTemplate)> {
        self.templates
            .iter()
            .enumerate()
            .map(|(i, t)| (TemplateId::new(i), t))
    }

    /// Runs template `id` against `name`. On a match the function is created
    /// from the capture groups and placed in the template's slot table.
    pub fn apply_template(&mut self, id: TemplateId, name: &str) -> Result<Option<FunctionId>> {
        let template = self
            .templates
            .get(id.index())
            .ok_or_else(|| RegistryError::UnknownTemplate(id.to_string()))?;
        let Some(parts) = template.decompose(name) else {
            return Ok(None);
        };
        let function =
            self.create_peripheral_function(name, &parts.base_name, &parts.instance, &parts.signal)?;
        self.add_function_to_template(id, function)?;
        Ok(Some(function))
    }

    /// Places an existing function in a template's slot table.
    pub fn add_function_to_template(&mut self, id: TemplateId, function: FunctionId) -> Result<usize> {
        let entity = self
            .functions
            .get(function.index())
            .ok_or_else(|| RegistryError::UnknownFunction(function.to_string()))?;
        let template = self
            .templates
            .get_mut(id.index())
            .ok_or_else(|| RegistryError::UnknownTemplate(id.to_string()))?;
        match template.add_function(function, entity) {
            Ok(index) => Ok(index),
            Err(SlotError::NotApplicable) => Err(RegistryError::SignalIndexNotApplicable {
                template: template.base_name().to_string(),
                function: entity.name.clone(),
            }),
            Err(SlotError::OutOfRange { index }) => Err(RegistryError::SignalIndexOutOfRange {
                template: template.base_name().to_string(),
                function: entity.name.clone(),
                index,
                max: MAX_SIGNAL_INDEX,
            }),
            Err(SlotError::Occupied { index, existing }) => {
                let template = template.base_name().to_string();
                let function = entity.name.clone();
                Err(RegistryError::SignalIndexCollision {
                    template,
                    index,
                    existing: self.function_name(existing),
                    function,
                })
            }
        }
    }

    // ------------------------------------------------------------ mappings

    /// Records that `function` is available on `pin` at selection `mux`.
    ///
    /// Functions accumulate as aliases on one mapping per `(pin, mux)`.
    /// Recording the same triple twice is rejected.
    pub fn create_mapping(
        &mut self,
        function: FunctionId,
        pin: PinId,
        mux: MuxSelection,
    ) -> Result<MappingId> {
        if self.function(function).is_none() {
            return Err(RegistryError::UnknownFunction(function.to_string()));
        }
        if self.pin(pin).is_none() {
            return Err(RegistryError::UnknownPin(pin.to_string()));
        }
        let next = MappingId::new(self.mappings.len());
        let by_mux = self.mappings_by_pin.entry(pin).or_default();
        let id = *by_mux.entry(mux).or_insert(next);
        if id == next {
            self.mappings.push(MappingInfo::new(pin, mux));
        }

        let mapping = &mut self.mappings[id.index()];
        if mapping.contains(function) {
            return Err(RegistryError::DuplicateMapping {
                function: self.function_name(function),
                pin: self.pins[pin.index()].name.clone(),
                mux,
            });
        }
        mapping.functions.push(function);
        self.mappings_by_function
            .entry(function)
            .or_default()
            .push(id);
        debug!(
            "Mapped {} to {} at {}",
            self.functions[function.index()].name,
            self.pins[pin.index()].name,
            mux
        );
        Ok(id)
    }

    pub fn mapping(&self, id: MappingId) -> Option<&MappingInfo> {
        self.mappings.get(id.index())
    }

    /// Mappings of `function` in insertion order.
    pub fn mappings_for_function(&self, function: FunctionId) -> impl Iterator<Item = &MappingInfo> {
        self.mappings_by_function
            .get(&function)
            .into_iter()
            .flatten()
            .map(move |id| &self.mappings[id.index()])
    }

    /// Mappings of `pin` keyed by mux selection.
    pub fn mappings_for_pin(&self, pin: PinId) -> impl Iterator<Item = &MappingInfo> {
        self.mappings_by_pin
            .get(&pin)
            .into_iter()
            .flat_map(|by_mux| by_mux.values())
            .map(move |id| &self.mappings[id.index()])
    }

    /// Function names of a mapping joined with `/`, e.g. `GPIOC_1/LLWU_P6`.
    pub fn function_list_label(&self, mapping: &MappingInfo) -> String {
        mapping
            .functions
            .iter()
            .map(|&id| self.function_name(id))
            .collect::<Vec<_>>()
            .join("/")
    }

    // -------------------------------------------------- reset and defaults

    /// Adopts as default the last non-reset mapping of `pin`, in selection
    /// order, whose function list label equals `label` (case-insensitive).
    pub fn set_default_peripheral_functions(&mut self, pin: PinId, label: &str) -> Result<()> {
        self.ensure_unset(pin, Pin::default_value, "default value")?;
        let mux = self.find_labelled_selection(pin, label, true)?;
        self.pin_mut(pin)?.set_default_value(mux)?;
        Ok(())
    }

    /// As [`set_default_peripheral_functions`](Self::set_default_peripheral_functions)
    /// but sets the reset value and accepts the reset selection itself.
    pub fn set_reset_peripheral_functions(&mut self, pin: PinId, label: &str) -> Result<()> {
        self.ensure_unset(pin, Pin::reset_value, "reset value")?;
        let mux = self.find_labelled_selection(pin, label, false)?;
        self.pin_mut(pin)?.set_reset_value(mux)?;
        Ok(())
    }

    pub fn set_default_selection(&mut self, pin: PinId, mux: MuxSelection) -> Result<()> {
        self.pin_mut(pin)?.set_default_value(mux)?;
        Ok(())
    }

    pub fn set_reset_selection(&mut self, pin: PinId, mux: MuxSelection) -> Result<()> {
        self.pin_mut(pin)?.set_reset_value(mux)?;
        Ok(())
    }

    fn ensure_unset(
        &self,
        pin: PinId,
        current: fn(&Pin) -> Option<MuxSelection>,
        what: &'static str,
    ) -> Result<()> {
        let entity = self
            .pin(pin)
            .ok_or_else(|| RegistryError::UnknownPin(pin.to_string()))?;
        match current(entity) {
            Some(value) => Err(ModelError::StateAlreadySet {
                owner: format!("Pin {}", entity.name),
                what,
                current: value.to_string(),
            }
            .into()),
            None => Ok(()),
        }
    }

    fn find_labelled_selection(
        &self,
        pin: PinId,
        label: &str,
        exclude_reset: bool,
    ) -> Result<MuxSelection> {
        self.mappings_for_pin(pin)
            .filter(|m| !(exclude_reset && m.mux == MuxSelection::Reset))
            .filter(|m| self.function_list_label(m).eq_ignore_ascii_case(label))
            .last()
            .map(|m| m.mux)
            .ok_or_else(|| RegistryError::NoMatchingMapping {
                pin: self
                    .pin(pin)
                    .map(|p| p.name.clone())
                    .unwrap_or_else(|| pin.to_string()),
                label: label.to_string(),
            })
    }

    // -------------------------------------------- devices, packages, DMA

    pub fn create_device_information(
        &mut self,
        name: &str,
        manual: &str,
        package: &str,
    ) -> Result<&DeviceInformation> {
        if self.find_device(name).is_some() {
            return Err(RegistryError::DuplicateDevice(name.to_string()));
        }
        info!("Device {} ({}, {})", name, manual, package);
        self.devices.push(DeviceInformation {
            name: name.to_string(),
            manual: manual.to_string(),
            package: package.to_string(),
        });
        Ok(&self.devices[self.devices.len() - 1])
    }

    pub fn find_device(&self, name: &str) -> Option<&DeviceInformation> {
        self.devices.iter().find(|d| d.name == name)
    }

    /// Devices in creation order.
    pub fn devices(&self) -> &[DeviceInformation] {
        &self.devices
    }

    pub fn create_device_package(&mut self, name: &str) -> Result<&mut DevicePackage> {
        if self.packages.contains_key(name) {
            return Err(RegistryError::DuplicatePackage(name.to_string()));
        }
        Ok(self
            .packages
            .entry(name.to_string())
            .or_insert_with(|| DevicePackage::new(name)))
    }

    pub fn find_or_create_device_package(&mut self, name: &str) -> &mut DevicePackage {
        self.packages
            .entry(name.to_string())
            .or_insert_with(|| DevicePackage::new(name))
    }

    pub fn find_device_package(&self, name: &str) -> Option<&DevicePackage> {
        self.packages.get(name)
    }

    pub fn packages(&self) -> impl Iterator<Item = &DevicePackage> {
        self.packages.values()
    }

    pub fn create_dma_info(&mut self, instance: u32, channel: u32, source: &str) -> &DmaInfo {
        self.dma.push(DmaInfo {
            dma_instance: instance,
            dma_channel: channel,
            dma_source: source.to_string(),
        });
        &self.dma[self.dma.len() - 1]
    }

    pub fn dma_info(&self) -> &[DmaInfo] {
        &self.dma
    }

    /// Sorts a list of names with the alphanumeric comparator.
    pub fn sort_names(names: &mut [String]) {
        names.sort_by(|a, b| compare_names(a, b).then_with(|| a.cmp(b)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writers::PwmWriter;

    fn ftm_registry() -> Registry {
        let mut registry = Registry::new(DeviceFamily::Mk);
        let template = PeripheralTemplate::with_pattern(
            "Ftm0",
            "FTM0",
            Some(r"(FTM)(0)_(CH\d+|QD_PH[A|B]|FLT\d|CLKIN\d)"),
            Box::new(PwmWriter),
        )
        .unwrap();
        registry.add_template(template).unwrap();
        registry
    }

    #[test]
    fn test_sentinels_are_not_indexed() {
        let registry = Registry::new(DeviceFamily::Mk);
        assert!(registry.pins().is_empty());
        assert!(registry.functions().is_empty());
        assert_eq!(registry.find_pin("DISABLED").unwrap(), PinId::DISABLED);
        assert_eq!(registry.pin(PinId::DISABLED).unwrap().name, "Disabled");
    }

    #[test]
    fn test_disabled_pin_name_cannot_be_created() {
        let mut registry = Registry::new(DeviceFamily::Mk);
        assert!(matches!(
            registry.create_pin("disabled"),
            Err(RegistryError::DuplicatePin(_))
        ));
        assert_eq!(registry.find_or_create_pin("Disabled").unwrap(), PinId::DISABLED);
    }

    #[test]
    fn test_classification_sets_template_and_flag() {
        let mut registry = ftm_registry();
        let id = registry.find_or_create_peripheral_function("FTM0_CH6").unwrap();
        let function = registry.function(id).unwrap();
        assert!(function.included);
        assert_eq!(function.template, registry.find_template("Ftm0"));
        assert_eq!(function.signal, "CH6");
        let peripheral = registry.peripheral(function.peripheral.unwrap()).unwrap();
        assert_eq!(peripheral.name(), "FTM0");

        // Second lookup returns the same entity without reclassifying.
        assert_eq!(registry.find_or_create_peripheral_function("FTM0_CH6").unwrap(), id);
    }

    #[test]
    fn test_collision_error_names_both_functions() {
        let mut registry = ftm_registry();
        registry.find_or_create_peripheral_function("FTM0_CH2").unwrap();
        let err = registry
            .find_or_create_peripheral_function("FTM0_CH02")
            .unwrap_err();
        match err {
            RegistryError::SignalIndexCollision {
                index,
                existing,
                function,
                ..
            } => {
                assert_eq!(index, 2);
                assert_eq!(existing, "FTM0_CH2");
                assert_eq!(function, "FTM0_CH02");
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn test_clock_info_validation() {
        let mut registry = ftm_registry();
        let ch0 = registry.find_or_create_peripheral_function("FTM0_CH0").unwrap();
        let updated = registry
            .set_peripheral_clock_info("ftm0", "SIM->SCGC6", None, &["FTM0_IRQn".to_string()])
            .unwrap();
        assert_eq!(updated, 1);
        let template = registry.template(TemplateId::new(0)).unwrap();
        assert_eq!(template.clock_reg(), Some("SCGC6"));
        assert_eq!(template.clock_mask(), Some("SIM_SCGC6_FTM0_MASK"));
        assert_eq!(template.irq_nums(), &["FTM0_IRQn".to_string()]);
        let peripheral = registry.function(ch0).unwrap().peripheral.unwrap();
        assert_eq!(
            registry.peripheral(peripheral).unwrap().clock_mask(),
            Some("SIM_SCGC6_FTM0_MASK")
        );

        assert!(matches!(
            registry.set_peripheral_clock_info("FTM0", "SCGC6", None, &[]),
            Err(RegistryError::InvalidClockRegister { .. })
        ));
        assert!(matches!(
            registry.set_peripheral_clock_info("FTM0", "SIM->SCGC6", Some("SIM_SCGC5_FTM0_MASK"), &[]),
            Err(RegistryError::ClockMaskMismatch { .. })
        ));
    }

    #[test]
    fn test_signal_index_past_table_is_an_error() {
        let mut registry = ftm_registry();
        let err = registry
            .find_or_create_peripheral_function("FTM0_CH1000000000000")
            .unwrap_err();
        assert!(matches!(
            err,
            RegistryError::SignalIndexOutOfRange { index: 1_000_000_000_000, max: 31, .. }
        ));
        let template = registry.template(TemplateId::new(0)).unwrap();
        assert!(template.functions().is_empty());
    }

    #[test]
    fn test_sort_names() {
        let mut names = vec!["PTA2".to_string(), "PTA10".to_string(), "PTA1".to_string()];
        Registry::sort_names(&mut names);
        assert_eq!(names, vec!["PTA10", "PTA2", "PTA1"]);
    }
}
