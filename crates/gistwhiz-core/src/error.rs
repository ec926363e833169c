//! Configuration error types.
//!
//! The comparison pipeline itself never fails; these errors only arise when
//! tolerances are loaded from user-supplied configuration.

use thiserror::Error;

/// Errors found while validating matcher tolerances.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    /// A value lies outside its allowed range.
    #[error("{field} = {value} is out of range ({expected})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },
}

impl ConfigError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            ConfigError::NotFinite { field } | ConfigError::OutOfRange { field, .. } => field,
        }
    }
}
