//! Typed handles into the registry's entity arenas.
//!
//! Entities reference each other through these ids rather than through
//! shared pointers, so the whole model stays plain owned data.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $tag:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(usize);

        impl $name {
            /// Wraps a raw arena index.
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            /// The raw arena index.
            pub const fn index(self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}#{}", $tag, self.0)
            }
        }
    };
}

entity_id!(
    /// Handle to a [`crate::Pin`].
    PinId,
    "pin"
);
entity_id!(
    /// Handle to a [`crate::Peripheral`].
    PeripheralId,
    "peripheral"
);
entity_id!(
    /// Handle to a [`crate::PeripheralFunction`].
    FunctionId,
    "function"
);
entity_id!(
    /// Handle to a [`crate::MappingInfo`].
    MappingId,
    "mapping"
);
entity_id!(
    /// Handle to a template catalog entry owned by the registry.
    TemplateId,
    "template"
);

impl PinId {
    /// The "Disabled" pin sentinel. Never stored in the pin name index.
    pub const DISABLED: PinId = PinId(0);
}

impl FunctionId {
    /// The "Disabled" function sentinel. Never stored in the function name index.
    pub const DISABLED: FunctionId = FunctionId(0);
}
