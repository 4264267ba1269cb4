//! Error types for unit lookups.

use thiserror::Error;

/// Errors that can occur when resolving units or conversion factors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UnitError {
    /// The symbol does not match any entry in the unit registry.
    #[error("Unable to find unit with symbol {0}")]
    UnitNotFound(String),

    /// The source unit exists but defines no factor to the target unit.
    #[error("Conversion rate from {from} to {to} not defined")]
    ConversionUndefined { from: String, to: String },
}
