//! Scalar precision for the whole engine.
//!
//! `Real` is the only place the floating-point width is chosen. It is `f32`
//! by default; enable the `double-precision` feature to build everything on
//! `f64` instead.
//!
//! ```
//! use cyclone_core::precision::{Real, TO_DEGREES, TO_RADIANS};
//!
//! let right_angle: Real = 90.0;
//! assert!((right_angle * TO_RADIANS * TO_DEGREES - right_angle).abs() < 1e-4);
//! ```

/// Real number type used by every vector and particle quantity.
#[cfg(not(feature = "double-precision"))]
pub type Real = f32;

/// Real number type used by every vector and particle quantity.
#[cfg(feature = "double-precision")]
pub type Real = f64;

#[cfg(not(feature = "double-precision"))]
use std::f32::consts as real_consts;
#[cfg(feature = "double-precision")]
use std::f64::consts as real_consts;

/// Pi at the selected precision.
pub const REAL_PI: Real = real_consts::PI;

/// Multiply radians by this to get degrees (180/π).
pub const TO_DEGREES: Real = 180.0 / REAL_PI;

/// Multiply degrees by this to get radians (π/180).
pub const TO_RADIANS: Real = REAL_PI / 180.0;

/// Square root over `Real`.
#[inline]
#[must_use]
pub fn real_sqrt(value: Real) -> Real {
    value.sqrt()
}

/// Arc-cosine over `Real`. Returns NaN outside `[-1, 1]`.
#[inline]
#[must_use]
pub fn real_acos(value: Real) -> Real {
    value.acos()
}
