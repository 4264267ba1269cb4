//! Data-rate units and the built-in unit registry.
//!
//! The registry is a fixed table: each unit carries its conversion factors
//! to other units and the significance threshold used by under-performance
//! detection. Thresholds are defined in the unit's own native scale and are
//! never converted; the detector compares them against raw sample values in
//! that same scale.

use crate::UnitError;

/// A single entry in the built-in unit table.
#[derive(Debug)]
struct UnitSpec {
    symbol: &'static str,
    name: &'static str,
    threshold: f64,
    /// Conversion factors keyed by target symbol. Every unit maps to itself
    /// with factor 1.0.
    conversions: &'static [(&'static str, f64)],
}

/// The built-in unit table.
const UNITS: &[UnitSpec] = &[
    UnitSpec {
        symbol: "B",
        name: "byte",
        threshold: 5_000_000.0,
        conversions: &[("B", 1.0), ("Mbit", 8.0e-6)],
    },
    UnitSpec {
        symbol: "Mbit",
        name: "megabit",
        threshold: 50.0,
        conversions: &[("B", 125_000.0), ("Mbit", 1.0)],
    },
];

/// A data-rate measurement unit, addressed by its symbol.
///
/// A `RateUnit` is a lightweight handle into the registry; constructing one
/// never fails. Lookups against an unknown symbol fail with
/// [`UnitError::UnitNotFound`], and symbols are matched case-sensitively.
///
/// # Example
///
/// ```rust
/// use ratewatch_types::RateUnit;
///
/// let unit = RateUnit::new("Mbit");
/// assert!(unit.is_valid());
/// assert_eq!(unit.conversion_to(&RateUnit::new("B")).unwrap(), 125_000.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateUnit {
    symbol: String,
}

impl RateUnit {
    /// Create a handle for the given unit symbol.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    /// The symbol this handle was constructed with.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Check whether the symbol matches a registry entry.
    pub fn is_valid(&self) -> bool {
        UNITS.iter().any(|u| u.symbol == self.symbol)
    }

    /// Resolve the registry entry for this symbol.
    fn spec(&self) -> Result<&'static UnitSpec, UnitError> {
        UNITS
            .iter()
            .find(|u| u.symbol == self.symbol)
            .ok_or_else(|| UnitError::UnitNotFound(self.symbol.clone()))
    }

    /// The factor to multiply a value in this unit with when converting it
    /// to `target`.
    pub fn conversion_to(&self, target: &RateUnit) -> Result<f64, UnitError> {
        let spec = self.spec()?;

        spec.conversions
            .iter()
            .find(|(symbol, _)| *symbol == target.symbol)
            .map(|(_, factor)| *factor)
            .ok_or_else(|| UnitError::ConversionUndefined {
                from: self.symbol.clone(),
                to: target.symbol.clone(),
            })
    }

    /// The change in value (in this unit's native scale) from which the
    /// difference between two consecutive samples counts as a slowdown.
    pub fn threshold(&self) -> Result<f64, UnitError> {
        Ok(self.spec()?.threshold)
    }

    /// Human-readable pluralized unit label, e.g. "Bytes per second".
    pub fn display_name(&self) -> Result<String, UnitError> {
        let name = self.spec()?.name;
        let mut chars = name.chars();
        let capitalized = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
            None => String::new(),
        };
        Ok(format!("{}s per second", capitalized))
    }
}

/// Symbols of all registered units, in table order.
pub fn known_symbols() -> impl Iterator<Item = &'static str> {
    UNITS.iter().map(|u| u.symbol)
}
