//! Errors returned by the checked (`try_*`) operations.
//!
//! The default vector operations never fail. These errors only come out of
//! the variants that opt in to validation.

use crate::precision::Real;

/// Errors that can occur in checked vector and particle operations
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CycloneError {
    /// Operand had zero magnitude where a direction was required
    ZeroMagnitude {
        /// Operation that rejected the operand
        operation: &'static str,
    },
    /// Operand had a NaN or infinite component
    NonFinite {
        /// Operation that rejected the operand
        operation: &'static str,
    },
    /// Scalar parameter fell outside its allowed range
    OutOfRange {
        /// Parameter name
        name: &'static str,
        /// Rejected value
        value: Real,
        /// Inclusive lower bound
        min: Real,
        /// Inclusive upper bound
        max: Real,
    },
}

impl std::fmt::Display for CycloneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CycloneError::ZeroMagnitude { operation } => {
                write!(f, "{operation}: vector has zero magnitude")
            }
            CycloneError::NonFinite { operation } => {
                write!(f, "{operation}: vector has a non-finite component")
            }
            CycloneError::OutOfRange {
                name,
                value,
                min,
                max,
            } => write!(f, "{name} must be in [{min}, {max}], got {value}"),
        }
    }
}

impl std::error::Error for CycloneError {}
