//! Errors raised by the entity model itself.

use thiserror::Error;

/// Failures detected while mutating a single entity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A set-once attribute (reset/default selection, clock info) was set twice.
    #[error("{owner} already has {what} {current}")]
    StateAlreadySet {
        /// Name of the entity being modified.
        owner: String,
        /// Attribute that was already set.
        what: &'static str,
        /// The value currently held.
        current: String,
    },

    /// An operation was invoked on input that its contract forbids.
    #[error("Invalid precondition: {0}")]
    InvalidPrecondition(String),

    /// A mux selection string could not be decoded.
    #[error("Invalid mux selection '{0}'")]
    InvalidMuxSelection(String),
}

/// Result alias for entity operations.
pub type Result<T> = std::result::Result<T, ModelError>;
