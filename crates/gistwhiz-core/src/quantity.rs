//! Quantity parsing: `<number><optional unit>` resolved to a value in a
//! canonical base unit.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::tables::{UNIT_BASES, UNIT_PREFIXES};

lazy_static! {
    /// Unsigned literal with at most one decimal point, then optional letters.
    static ref QUANTITY_PATTERN: Regex =
        Regex::new(r"^(\d+(?:\.\d*)?|\.\d+)(?:\s*([a-z]+))?$").unwrap();
}

/// A numeric value paired with its canonical base unit, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    /// Value after prefix scaling.
    pub value: f64,
    /// Canonical base unit; `None` means unitless or unrecognized.
    pub unit: Option<String>,
}

impl Quantity {
    /// Whether two quantities share a unit and differ by less than `epsilon`.
    pub fn approx_eq(&self, other: &Quantity, epsilon: f64) -> bool {
        self.unit == other.unit && (self.value - other.value).abs() < epsilon
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.unit {
            Some(unit) => write!(f, "{} {}", self.value, unit),
            None => write!(f, "{}", self.value),
        }
    }
}

/// Parse a normalized string as a quantity.
///
/// Returns `None` when the whole string is not a number optionally followed
/// by letters. An unrecognized unit is not a failure: the value comes back
/// with no unit.
pub fn parse_quantity(s: &str) -> Option<Quantity> {
    let caps = QUANTITY_PATTERN.captures(s)?;
    let value: f64 = caps.get(1)?.as_str().parse().ok()?;

    let Some(unit) = caps.get(2).map(|m| m.as_str()) else {
        return Some(Quantity { value, unit: None });
    };

    Some(resolve_unit(value, unit))
}

/// Resolve a unit suffix in fixed order: one-character prefix on a known
/// base, then the whole suffix as a base, then no unit.
fn resolve_unit(value: f64, unit: &str) -> Quantity {
    let split = unit.chars().next().map_or(0, char::len_utf8);
    let (prefix, base) = unit.split_at(split);

    if let Some(&canonical) = UNIT_BASES.get(base) {
        let scale = UNIT_PREFIXES.get(prefix).copied().unwrap_or(1.0);
        return Quantity {
            value: value * scale,
            unit: Some(canonical.to_string()),
        };
    }

    if let Some(&canonical) = UNIT_BASES.get(unit) {
        return Quantity {
            value,
            unit: Some(canonical.to_string()),
        };
    }

    tracing::trace!(unit, "unrecognized unit, comparing as unitless");
    Quantity { value, unit: None }
}
