//! Muxgen Intermediate Representation (IR)
//!
//! This crate defines the serializable entities used to describe how the
//! signals of a microcontroller family are multiplexed onto its package pins:
//!
//! 1. **Pins**: physical package pins, optionally decoded into a port letter and bit number.
//! 2. **Peripherals and Functions**: peripheral instances and the named signals they own.
//! 3. **Mappings**: the join of one pin and one mux selection to the functions it carries.
//! 4. **Packages and Devices**: which pins are bonded out, and where.
//!
//! The entities are plain data. Identity, uniqueness and cross references are
//! enforced by the registry in `muxgen-core`, which hands out the typed ids
//! defined in [`ids`].

#![warn(missing_docs)]

pub mod device;
pub mod error;
pub mod family;
pub mod function;
pub mod ids;
pub mod mapping;
pub mod ordering;
pub mod peripheral;
pub mod pin;

pub use device::{DeviceInformation, DevicePackage, DmaInfo};
pub use error::{ModelError, Result};
pub use family::DeviceFamily;
pub use function::PeripheralFunction;
pub use ids::{FunctionId, MappingId, PeripheralId, PinId, TemplateId};
pub use mapping::{MappingInfo, MuxSelection};
pub use ordering::{compare_names, NameKey};
pub use peripheral::Peripheral;
pub use pin::{Pin, PortPin};
