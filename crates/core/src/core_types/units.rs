//! Semantic unit types for angles and bounded ratios
//!
//! Newtype wrappers keep radians from being mixed up with degrees and keep
//! damping-style ratios inside `[0, 1]`.
//!
//! # Design Philosophy
//! - Wrap `Real` so precision follows the `double-precision` feature
//! - Total ordering via `Ord` (NaN handled as greater than all values)
//! - Explicit conversion methods between related types
//! - Serde support for serialization
//!
//! # Usage
//! ```
//! use cyclone_core::core_types::units::{Degrees, Radians};
//!
//! let right = Degrees::new(90.0);
//! let rad: Radians = right.into();
//! assert!((*rad - std::f32::consts::FRAC_PI_2 as cyclone_core::Real).abs() < 1e-5);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;

use crate::error::CycloneError;
use crate::precision::{Real, TO_DEGREES, TO_RADIANS};

/// Compare `Real` values with total ordering using the built-in `total_cmp`
#[inline]
fn real_total_cmp(a: Real, b: Real) -> Ordering {
    a.total_cmp(&b)
}

// ============================================================================
// ANGLE TYPES
// ============================================================================

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Degrees(Real);

impl Eq for Degrees {}

impl PartialOrd for Degrees {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Degrees {
    fn cmp(&self, other: &Self) -> Ordering {
        real_total_cmp(self.0, other.0)
    }
}

impl Deref for Degrees {
    type Target = Real;
    #[inline]
    fn deref(&self) -> &Real {
        &self.0
    }
}

impl Degrees {
    /// Create a new angle in degrees
    #[inline]
    #[must_use]
    pub const fn new(value: Real) -> Self {
        Degrees(value)
    }

    /// Get the raw value
    #[inline]
    #[must_use]
    pub fn value(self) -> Real {
        self.0
    }

    /// Convert to radians
    #[inline]
    #[must_use]
    pub fn to_radians(self) -> Radians {
        Radians(self.0 * TO_RADIANS)
    }
}

impl From<Real> for Degrees {
    fn from(v: Real) -> Self {
        Degrees(v)
    }
}

impl From<Degrees> for Radians {
    fn from(d: Degrees) -> Radians {
        d.to_radians()
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°", self.0)
    }
}

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Radians(Real);

impl Eq for Radians {}

impl PartialOrd for Radians {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Radians {
    fn cmp(&self, other: &Self) -> Ordering {
        real_total_cmp(self.0, other.0)
    }
}

impl Deref for Radians {
    type Target = Real;
    #[inline]
    fn deref(&self) -> &Real {
        &self.0
    }
}

impl Radians {
    /// Create a new angle in radians
    #[inline]
    #[must_use]
    pub const fn new(value: Real) -> Self {
        Radians(value)
    }

    /// Get the raw value
    #[inline]
    #[must_use]
    pub fn value(self) -> Real {
        self.0
    }

    /// Convert to degrees
    #[inline]
    #[must_use]
    pub fn to_degrees(self) -> Degrees {
        Degrees(self.0 * TO_DEGREES)
    }

    /// Whether the angle is NaN (undefined)
    #[inline]
    #[must_use]
    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }
}

impl From<Real> for Radians {
    fn from(v: Real) -> Self {
        Radians(v)
    }
}

impl From<Radians> for Degrees {
    fn from(r: Radians) -> Degrees {
        r.to_degrees()
    }
}

impl fmt::Display for Radians {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4} rad", self.0)
    }
}

// ============================================================================
// FRACTION/RATIO TYPES
// ============================================================================

/// A fraction in the range [0, 1]
/// Represents damping coefficients and other retained-proportion ratios
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Real", into = "Real")]
#[repr(transparent)]
pub struct Fraction(Real);

impl Eq for Fraction {}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        real_total_cmp(self.0, other.0)
    }
}

impl Deref for Fraction {
    type Target = Real;
    #[inline]
    fn deref(&self) -> &Real {
        &self.0
    }
}

impl Fraction {
    /// Zero fraction
    pub const ZERO: Fraction = Fraction(0.0);

    /// Full/complete (1.0)
    pub const ONE: Fraction = Fraction(1.0);

    /// Create a new fraction. Asserts value is within [0, 1].
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: Real) -> Self {
        assert!(
            value >= 0.0 && value <= 1.0,
            "Fraction::new: value not in [0, 1]"
        );
        Fraction(value)
    }

    /// Create a fraction, rejecting values outside [0, 1] (NaN included).
    ///
    /// # Errors
    /// Returns [`CycloneError::OutOfRange`] naming `name` when `value` is not
    /// in `[0, 1]`.
    pub fn try_new(name: &'static str, value: Real) -> Result<Self, CycloneError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Fraction(value))
        } else {
            Err(CycloneError::OutOfRange {
                name,
                value,
                min: 0.0,
                max: 1.0,
            })
        }
    }

    /// Get the raw value
    #[inline]
    #[must_use]
    pub fn value(self) -> Real {
        self.0
    }
}

// Deserialization goes through here, so stored data cannot bypass the range check
impl TryFrom<Real> for Fraction {
    type Error = CycloneError;
    fn try_from(value: Real) -> Result<Self, CycloneError> {
        Fraction::try_new("fraction", value)
    }
}

impl From<Fraction> for Real {
    fn from(f: Fraction) -> Real {
        f.0
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}
