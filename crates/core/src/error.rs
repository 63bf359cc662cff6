// Muxgen - Pin Mapping Table Generator
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use muxgen_ir::{ModelError, MuxSelection};
use thiserror::Error;

/// Every failure the registry can raise.
///
/// All of them abort the current device run. The registry is not rolled
/// back, so callers discard it after an error.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Pin {0} already exists")]
    DuplicatePin(String),
    #[error("Peripheral {0} already exists")]
    DuplicatePeripheral(String),
    #[error("Peripheral function {0} already exists")]
    DuplicateFunction(String),
    #[error("Device {0} already exists")]
    DuplicateDevice(String),
    #[error("Package {0} already exists")]
    DuplicatePackage(String),
    #[error("Template {0} already exists")]
    DuplicateTemplate(String),
    #[error("Function {function} is already mapped to {pin} at {mux}")]
    DuplicateMapping {
        function: String,
        pin: String,
        mux: MuxSelection,
    },

    #[error("No template matches peripheral function {0}")]
    NoMatchingTemplate(String),
    #[error("Template {template} matched {function} but has no signal index for it")]
    SignalIndexNotApplicable { template: String, function: String },
    #[error("Template {template} index {index} holds {existing}, cannot assign {function}")]
    SignalIndexCollision {
        template: String,
        index: usize,
        existing: String,
        function: String,
    },

    #[error("Template {template} cannot hold {function} at index {index}, the last slot is {max}")]
    SignalIndexOutOfRange {
        template: String,
        function: String,
        index: usize,
        max: usize,
    },

    #[error("Peripheral function {0} not found")]
    UnknownFunction(String),
    #[error("Pin {0} not found")]
    UnknownPin(String),
    #[error("Peripheral {0} not found")]
    UnknownPeripheral(String),
    #[error("Template {0} not found")]
    UnknownTemplate(String),
    #[error("Package {0} not found")]
    UnknownPackage(String),
    #[error("Device {0} not found")]
    UnknownDevice(String),
    #[error("Peripheral {label} not found as option for pin {pin}")]
    NoMatchingMapping { pin: String, label: String },

    #[error("Unexpected peripheral clock register {reg} for {peripheral}")]
    InvalidClockRegister { peripheral: String, reg: String },
    #[error("Clock mask {mask} doesn't match clock register {reg}")]
    ClockMaskMismatch { mask: String, reg: String },

    #[error("Invalid template pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
