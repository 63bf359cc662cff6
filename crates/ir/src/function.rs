//! Peripheral functions (named signals).

use crate::ids::{PeripheralId, TemplateId};
use crate::ordering::compare_names;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Name of the "Disabled" sentinel function.
pub const DISABLED_NAME: &str = "Disabled";

/// A single named signal belonging to a peripheral, e.g. `FTM0_CH6`.
///
/// The decomposition into peripheral/instance/signal is done once by the
/// template that classified the name; the function only keeps the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeripheralFunction {
    /// Full signal name.
    pub name: String,

    /// Owning peripheral. `None` only for the Disabled sentinel.
    pub peripheral: Option<PeripheralId>,

    /// Signal fragment, e.g. `CH6`.
    pub signal: String,

    /// Set once the function has been classified by a template.
    pub included: bool,

    /// Template that classified this function.
    pub template: Option<TemplateId>,
}

impl PeripheralFunction {
    /// Creates an unclassified function owned by `peripheral`.
    pub fn new(name: impl Into<String>, peripheral: PeripheralId, signal: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            peripheral: Some(peripheral),
            signal: signal.into(),
            included: false,
            template: None,
        }
    }

    /// The singleton "Disabled" function.
    pub fn disabled() -> Self {
        Self {
            name: DISABLED_NAME.to_string(),
            peripheral: None,
            signal: String::new(),
            included: false,
            template: None,
        }
    }

    /// True if `name` designates the Disabled sentinel (case-insensitive).
    pub fn is_disabled_name(name: &str) -> bool {
        name.eq_ignore_ascii_case(DISABLED_NAME)
    }

    /// Orders two functions by name using the alphanumeric comparator.
    pub fn compare(&self, other: &Self) -> Ordering {
        compare_names(&self.name, &other.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_sentinel() {
        let disabled = PeripheralFunction::disabled();
        assert!(disabled.peripheral.is_none());
        assert!(PeripheralFunction::is_disabled_name("DISABLED"));
        assert!(PeripheralFunction::is_disabled_name("disabled"));
        assert!(!PeripheralFunction::is_disabled_name("Disable"));
    }

    #[test]
    fn test_compare_uses_alphanumeric_order() {
        let ch10 = PeripheralFunction::new("FTM0_CH10", PeripheralId::new(1), "CH10");
        let ch6 = PeripheralFunction::new("FTM0_CH6", PeripheralId::new(1), "CH6");
        assert_eq!(ch10.compare(&ch6), Ordering::Less);
    }
}
