// Muxgen - Pin Mapping Table Generator
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

//! Peripheral/pin resolution engine.
//!
//! The [`Registry`] owns every pin, peripheral, function and mapping of one
//! device run. Raw signal names are classified by the template catalog
//! ([`PeripheralTemplate`]), and [`emit::emit_info_table`] turns a template's
//! function slots into the conditional PCR records of one package.

pub mod catalog;
pub mod emit;
pub mod error;
pub mod misc;
pub mod registry;
pub mod template;
pub mod writers;

pub use emit::{emit_info_table, Guard, PcrRecord, PcrTuple, RecordValue};
pub use error::{RegistryError, Result};
pub use registry::Registry;
pub use template::{Decomposition, Matcher, PeripheralTemplate, MAX_SIGNAL_INDEX};

use muxgen_ir::{PeripheralFunction, Pin};

/// Per-family code emission policy held by every template.
///
/// The registry only ever sees this trait; which peripheral family an
/// implementation serves is invisible to it.
pub trait SignalWriter: std::fmt::Debug + Send {
    /// Position of `function` in the template's slot table, `None` if the
    /// signal has no slot in this family.
    fn signal_index(&self, function: &PeripheralFunction) -> Option<usize>;

    /// Whether the family gets a `PcrInfo` table in its information class.
    fn needs_info_class(&self) -> bool {
        true
    }

    /// Whether pin aliases (`using gpio_A5 = ...`) are rendered for `pin`.
    fn uses_aliases(&self, pin: &Pin) -> bool {
        pin.port_pin.is_some()
    }

    /// Doxygen group identifier.
    fn group_name(&self) -> &'static str;

    /// Doxygen group title.
    fn group_title(&self) -> &'static str;

    /// One-line doxygen brief for the group.
    fn group_brief(&self) -> Option<&'static str> {
        None
    }

    /// `static constexpr` members placed at the top of the information class.
    fn info_constants(&self, template: &PeripheralTemplate) -> String {
        writers::default_info_constants(template)
    }

    /// Definitions emitted after the information class closes.
    fn extra_definitions(&self, _template: &PeripheralTemplate) -> String {
        String::new()
    }
}
