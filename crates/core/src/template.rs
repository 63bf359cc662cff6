// Muxgen - Pin Mapping Table Generator
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use crate::error::Result;
use crate::SignalWriter;
use muxgen_ir::{FunctionId, PeripheralFunction, Pin};
use regex::Regex;

/// Highest slot a template may hold; generated `info[]` tables have 32 entries.
pub const MAX_SIGNAL_INDEX: usize = 31;

/// How a template recognises signal names.
#[derive(Debug)]
pub enum Matcher {
    /// Full-match pattern with three capture groups: base, instance, signal.
    Pattern(Regex),
    /// Catch-all family populated only through direct registration.
    Unmatched,
}

impl Matcher {
    /// Compiles `pattern` so that it must match the whole name.
    pub fn compile(pattern: &str) -> Result<Self> {
        let anchored = format!("^(?:{})$", pattern);
        Ok(Matcher::Pattern(Regex::new(&anchored)?))
    }

    pub fn is_match(&self, name: &str) -> bool {
        match self {
            Matcher::Pattern(re) => re.is_match(name),
            Matcher::Unmatched => false,
        }
    }

    pub fn decompose(&self, name: &str) -> Option<Decomposition> {
        match self {
            Matcher::Pattern(re) => Decomposition::from_captures(re, name),
            Matcher::Unmatched => None,
        }
    }
}

/// A signal name split into peripheral base, instance and signal fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition {
    pub base_name: String,
    pub instance: String,
    pub signal: String,
}

impl Decomposition {
    /// Applies `re` to `name` and reads capture groups 1..=3. Missing groups are empty.
    pub fn from_captures(re: &Regex, name: &str) -> Option<Self> {
        let caps = re.captures(name)?;
        let group = |i: usize| {
            caps.get(i)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default()
        };
        Some(Self {
            base_name: group(1),
            instance: group(2),
            signal: group(3),
        })
    }
}

/// Why a function could not be placed in a template slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotError {
    /// The family writer has no index for the signal.
    NotApplicable,
    /// A different function already holds the slot.
    Occupied { index: usize, existing: FunctionId },
    /// The writer computed an index past `MAX_SIGNAL_INDEX`.
    OutOfRange { index: usize },
}

/// One peripheral family entry of the template catalog.
#[derive(Debug)]
pub struct PeripheralTemplate {
    base_name: String,
    peripheral_name: String,
    matcher: Matcher,
    writer: Box<dyn SignalWriter>,
    slots: Vec<Option<FunctionId>>,
    unindexed: Vec<FunctionId>,
    clock_reg: Option<String>,
    clock_mask: Option<String>,
    irq_nums: Vec<String>,
    irq_handler: Option<String>,
}

impl PeripheralTemplate {
    pub fn new(
        base_name: impl Into<String>,
        peripheral_name: impl Into<String>,
        matcher: Matcher,
        writer: Box<dyn SignalWriter>,
    ) -> Self {
        Self {
            base_name: base_name.into(),
            peripheral_name: peripheral_name.into(),
            matcher,
            writer,
            slots: Vec::new(),
            unindexed: Vec::new(),
            clock_reg: None,
            clock_mask: None,
            irq_nums: Vec::new(),
            irq_handler: None,
        }
    }

    /// Convenience constructor compiling an optional pattern.
    pub fn with_pattern(
        base_name: impl Into<String>,
        peripheral_name: impl Into<String>,
        pattern: Option<&str>,
        writer: Box<dyn SignalWriter>,
    ) -> Result<Self> {
        let matcher = match pattern {
            Some(p) => Matcher::compile(p)?,
            None => Matcher::Unmatched,
        };
        Ok(Self::new(base_name, peripheral_name, matcher, writer))
    }

    /// Catalog key and information class stem, e.g. `Ftm0`.
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Hardware peripheral name, e.g. `FTM0`.
    pub fn peripheral_name(&self) -> &str {
        &self.peripheral_name
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn writer(&self) -> &dyn SignalWriter {
        self.writer.as_ref()
    }

    /// True iff the pattern matches the function's full name.
    pub fn matches(&self, function: &PeripheralFunction) -> bool {
        self.matcher.is_match(&function.name)
    }

    pub fn decompose(&self, name: &str) -> Option<Decomposition> {
        self.matcher.decompose(name)
    }

    /// Places `function` at the slot its writer computes, growing the table as needed.
    ///
    /// Re-adding the same function at the same slot is a no-op.
    pub fn add_function(
        &mut self,
        id: FunctionId,
        function: &PeripheralFunction,
    ) -> std::result::Result<usize, SlotError> {
        let index = self
            .writer
            .signal_index(function)
            .ok_or(SlotError::NotApplicable)?;
        if index > MAX_SIGNAL_INDEX {
            return Err(SlotError::OutOfRange { index });
        }
        if self.slots.len() <= index {
            self.slots.resize(index + 1, None);
        }
        match self.slots[index] {
            Some(existing) if existing != id => Err(SlotError::Occupied { index, existing }),
            _ => {
                self.slots[index] = Some(id);
                Ok(index)
            }
        }
    }

    /// Attaches a function without a slot (catch-all families).
    pub fn add_unindexed(&mut self, id: FunctionId) {
        if !self.unindexed.contains(&id) {
            self.unindexed.push(id);
        }
    }

    /// Function slots in signal-index order.
    pub fn functions(&self) -> &[Option<FunctionId>] {
        &self.slots
    }

    pub fn unindexed_functions(&self) -> &[FunctionId] {
        &self.unindexed
    }

    pub fn set_clock_info(&mut self, reg: impl Into<String>, mask: impl Into<String>) {
        self.clock_reg = Some(reg.into());
        self.clock_mask = Some(mask.into());
    }

    pub fn clock_reg(&self) -> Option<&str> {
        self.clock_reg.as_deref()
    }

    pub fn clock_mask(&self) -> Option<&str> {
        self.clock_mask.as_deref()
    }

    pub fn add_irq_num(&mut self, irq: impl Into<String>) {
        self.irq_nums.push(irq.into());
    }

    pub fn irq_nums(&self) -> &[String] {
        &self.irq_nums
    }

    pub fn irq_count(&self) -> usize {
        self.irq_nums.len()
    }

    /// IRQ numbers joined as a C initialiser list, `None` when there are none.
    pub fn irq_nums_as_initialiser(&self) -> Option<String> {
        if self.irq_nums.is_empty() {
            None
        } else {
            Some(self.irq_nums.join(", "))
        }
    }

    pub fn set_irq_handler(&mut self, handler: impl Into<String>) {
        self.irq_handler = Some(handler.into());
    }

    pub fn irq_handler(&self) -> Option<&str> {
        self.irq_handler.as_deref()
    }

    /// A PCR table is rendered when the writer wants one and any slot exists.
    pub fn needs_pcr_info_table(&self) -> bool {
        self.writer.needs_info_class() && !self.slots.is_empty()
    }

    /// An information class is rendered at all only when this holds.
    pub fn class_is_used(&self) -> bool {
        self.clock_mask.is_some() || self.clock_reg.is_some() || self.needs_pcr_info_table()
    }

    pub fn uses_aliases(&self, pin: &Pin) -> bool {
        self.writer.uses_aliases(pin)
    }
}
