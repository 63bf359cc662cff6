//! Peripheral instances.

use crate::error::{ModelError, Result};
use serde::{Deserialize, Serialize};

/// One instance of a peripheral family, e.g. base `FTM` instance `0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Peripheral {
    /// Family name, e.g. `FTM`.
    pub base_name: String,
    /// Instance identifier, possibly empty (e.g. `PIT`).
    pub instance: String,
    /// SIM clock gating register, e.g. `SCGC6`.
    #[serde(default)]
    clock_reg: Option<String>,
    /// SIM clock gating mask, e.g. `SIM_SCGC6_FTM0_MASK`.
    #[serde(default)]
    clock_mask: Option<String>,
}

impl Peripheral {
    /// Creates a peripheral with no clock information.
    pub fn new(base_name: impl Into<String>, instance: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
            instance: instance.into(),
            clock_reg: None,
            clock_mask: None,
        }
    }

    /// Full peripheral name (`base_name` + `instance`).
    pub fn name(&self) -> String {
        format!("{}{}", self.base_name, self.instance)
    }

    /// SIM clock gating register, if known.
    pub fn clock_reg(&self) -> Option<&str> {
        self.clock_reg.as_deref()
    }

    /// SIM clock gating mask, if known.
    pub fn clock_mask(&self) -> Option<&str> {
        self.clock_mask.as_deref()
    }

    /// Records the clock gating register and mask. May only be done once.
    pub fn set_clock_info(&mut self, reg: impl Into<String>, mask: impl Into<String>) -> Result<()> {
        if let Some(current) = &self.clock_reg {
            return Err(ModelError::StateAlreadySet {
                owner: format!("Peripheral {}", self.name()),
                what: "clock register",
                current: current.clone(),
            });
        }
        self.clock_reg = Some(reg.into());
        self.clock_mask = Some(mask.into());
        Ok(())
    }
}
