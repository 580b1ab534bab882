//! Three-component vector used for positions, velocities and accelerations.
//!
//! Operations come in two flavours: ones that mutate `self` in place
//! (`invert`, `normalize`, `add_scaled_vector`, the `*Assign` operators) and
//! ones that return a fresh copy. None of the default operations fail. NaN and
//! infinite components pass straight through, and `normalize` silently leaves
//! the zero vector alone. Callers that want validation use the `try_*`
//! variants instead.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

use crate::core_types::units::{Degrees, Radians};
use crate::error::CycloneError;
use crate::precision::{real_acos, real_sqrt, Real, TO_DEGREES};

/// A point or direction in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    /// X component
    pub x: Real,
    /// Y component
    pub y: Real,
    /// Z component
    pub z: Real,
}

impl Vector3 {
    /// Unit vector along +X
    pub const X: Vector3 = Vector3::new(1.0, 0.0, 0.0);
    /// Unit vector along +Y
    pub const Y: Vector3 = Vector3::new(0.0, 1.0, 0.0);
    /// Unit vector along +Z
    pub const Z: Vector3 = Vector3::new(0.0, 0.0, 1.0);

    /// Create a vector from its components. Values are not validated.
    #[inline]
    #[must_use]
    pub const fn new(x: Real, y: Real, z: Real) -> Self {
        Self { x, y, z }
    }

    /// The zero vector `(0, 0, 0)`.
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Negate every component in place.
    #[inline]
    pub fn invert(&mut self) {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
    }

    /// Length of the vector.
    #[inline]
    #[must_use]
    pub fn magnitude(&self) -> Real {
        real_sqrt(self.square_magnitude())
    }

    /// Squared length. Cheaper than [`magnitude`](Self::magnitude) when only
    /// relative size matters.
    #[inline]
    #[must_use]
    pub fn square_magnitude(&self) -> Real {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Scale to unit length in place.
    ///
    /// A vector whose magnitude is not strictly positive (the zero vector, or
    /// one with a NaN component) is left untouched.
    #[inline]
    pub fn normalize(&mut self) {
        let m = self.magnitude();
        if m > 0.0 {
            *self *= 1.0 / m;
        }
    }

    /// Unit-length copy of this vector, following the same rules as
    /// [`normalize`](Self::normalize).
    #[inline]
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut v = *self;
        v.normalize();
        v
    }

    /// Normalize in place, reporting degenerate input instead of ignoring it.
    ///
    /// # Errors
    /// - [`CycloneError::NonFinite`] if any component is NaN or infinite
    /// - [`CycloneError::ZeroMagnitude`] if the vector is zero
    ///
    /// On error the vector is left unchanged.
    ///
    /// Components are divided by the largest absolute component before the
    /// length is taken, so vectors whose squared length would overflow or
    /// underflow `Real` still come out with unit length.
    pub fn try_normalize(&mut self) -> Result<(), CycloneError> {
        if !self.is_finite() {
            return Err(CycloneError::NonFinite {
                operation: "normalize",
            });
        }
        let largest = self.x.abs().max(self.y.abs()).max(self.z.abs());
        if largest == 0.0 {
            return Err(CycloneError::ZeroMagnitude {
                operation: "normalize",
            });
        }
        // Largest component is now exactly 1, so the length lies in [1, sqrt(3)]
        let scaled = Vector3::new(self.x / largest, self.y / largest, self.z / largest);
        *self = scaled * (1.0 / scaled.magnitude());
        Ok(())
    }

    /// Add `vector * scale` to this vector in place.
    #[inline]
    pub fn add_scaled_vector(&mut self, vector: &Vector3, scale: Real) {
        self.x += vector.x * scale;
        self.y += vector.y * scale;
        self.z += vector.z * scale;
    }

    /// Component-wise (Hadamard) product, returned as a new vector.
    #[inline]
    #[must_use]
    pub fn component_product(&self, vector: &Vector3) -> Vector3 {
        Vector3::new(self.x * vector.x, self.y * vector.y, self.z * vector.z)
    }

    /// Component-wise (Hadamard) product, applied in place.
    #[inline]
    pub fn component_product_update(&mut self, vector: &Vector3) {
        self.x *= vector.x;
        self.y *= vector.y;
        self.z *= vector.z;
    }

    /// Dot product.
    #[inline]
    #[must_use]
    pub fn scalar_product(&self, vector: &Vector3) -> Real {
        self.x * vector.x + self.y * vector.y + self.z * vector.z
    }

    /// Right-handed cross product, returned as a new vector.
    #[inline]
    #[must_use]
    pub fn vector_product(&self, vector: &Vector3) -> Vector3 {
        Vector3::new(
            self.y * vector.z - self.z * vector.y,
            self.z * vector.x - self.x * vector.z,
            self.x * vector.y - self.y * vector.x,
        )
    }

    /// Replace this vector with `self × vector`.
    #[inline]
    pub fn vector_product_update(&mut self, vector: &Vector3) {
        *self = self.vector_product(vector);
    }

    /// Angle between this vector and `vector`, in radians.
    ///
    /// Both operands are normalized on private copies before taking the
    /// arc-cosine of their dot product. The angle is undefined when either
    /// operand is the zero vector, and the result is NaN in that case. NaN
    /// components also propagate to a NaN result.
    #[must_use]
    pub fn angle_between_radians(&self, vector: &Vector3) -> Real {
        if self.is_zero() || vector.is_zero() {
            return Real::NAN;
        }
        let a = self.normalized();
        let b = vector.normalized();
        real_acos(a.scalar_product(&b))
    }

    /// Angle between this vector and `vector`, in degrees.
    ///
    /// Same degenerate-input rules as
    /// [`angle_between_radians`](Self::angle_between_radians).
    #[must_use]
    pub fn angle_between_degrees(&self, vector: &Vector3) -> Real {
        self.angle_between_radians(vector) * TO_DEGREES
    }

    /// Typed form of [`angle_between_radians`](Self::angle_between_radians).
    #[inline]
    #[must_use]
    pub fn angle_between(&self, vector: &Vector3) -> Radians {
        Radians::new(self.angle_between_radians(vector))
    }

    /// Angle between the two vectors, rejecting operands for which it is
    /// undefined.
    ///
    /// The cosine is clamped to `[-1, 1]` so that rounding on (anti)parallel
    /// vectors cannot produce NaN.
    ///
    /// # Errors
    /// - [`CycloneError::NonFinite`] if either operand has a NaN or infinite component
    /// - [`CycloneError::ZeroMagnitude`] if either operand is the zero vector
    pub fn try_angle_between(&self, vector: &Vector3) -> Result<Radians, CycloneError> {
        const OPERATION: &str = "angle_between";
        if !self.is_finite() || !vector.is_finite() {
            return Err(CycloneError::NonFinite {
                operation: OPERATION,
            });
        }
        let mut a = *self;
        let mut b = *vector;
        a.try_normalize().map_err(|_| CycloneError::ZeroMagnitude {
            operation: OPERATION,
        })?;
        b.try_normalize().map_err(|_| CycloneError::ZeroMagnitude {
            operation: OPERATION,
        })?;
        let cos = a.scalar_product(&b).clamp(-1.0, 1.0);
        Ok(Radians::new(real_acos(cos)))
    }

    /// Typed degrees form of [`try_angle_between`](Self::try_angle_between).
    ///
    /// # Errors
    /// Same as [`try_angle_between`](Self::try_angle_between).
    pub fn try_angle_between_degrees(&self, vector: &Vector3) -> Result<Degrees, CycloneError> {
        self.try_angle_between(vector).map(Radians::to_degrees)
    }

    /// Whether all three components are exactly zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// Whether all three components are finite.
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

// ============================================================================
// OPERATORS
// ============================================================================

impl Neg for Vector3 {
    type Output = Vector3;
    #[inline]
    fn neg(mut self) -> Vector3 {
        self.invert();
        self
    }
}

impl Add for Vector3 {
    type Output = Vector3;
    #[inline]
    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vector3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vector3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    #[inline]
    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vector3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector3) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

// Vector3 * Real = Vector3 (scaling)
impl Mul<Real> for Vector3 {
    type Output = Vector3;
    #[inline]
    fn mul(self, rhs: Real) -> Vector3 {
        Vector3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl MulAssign<Real> for Vector3 {
    #[inline]
    fn mul_assign(&mut self, rhs: Real) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

// Vector3 * Vector3 = Real (dot product)
impl Mul for Vector3 {
    type Output = Real;
    #[inline]
    fn mul(self, rhs: Vector3) -> Real {
        self.scalar_product(&rhs)
    }
}

// Vector3 % Vector3 = Vector3 (cross product)
impl Rem for Vector3 {
    type Output = Vector3;
    #[inline]
    fn rem(self, rhs: Vector3) -> Vector3 {
        self.vector_product(&rhs)
    }
}

impl RemAssign for Vector3 {
    #[inline]
    fn rem_assign(&mut self, rhs: Vector3) {
        self.vector_product_update(&rhs);
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<[Real; 3]> for Vector3 {
    fn from([x, y, z]: [Real; 3]) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<Vector3> for [Real; 3] {
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl From<nalgebra::Vector3<Real>> for Vector3 {
    fn from(v: nalgebra::Vector3<Real>) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for nalgebra::Vector3<Real> {
    fn from(v: Vector3) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_vec_near(actual: Vector3, expected: Vector3) {
        assert_relative_eq!(actual.x, expected.x, epsilon = 1e-5);
        assert_relative_eq!(actual.y, expected.y, epsilon = 1e-5);
        assert_relative_eq!(actual.z, expected.z, epsilon = 1e-5);
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Vector3::default(), Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(Vector3::zero(), Vector3::default());
    }

    #[test]
    fn test_invert_twice_is_identity() {
        let original = Vector3::new(1.5, -2.25, 0.0);
        let mut v = original;
        v.invert();
        assert_eq!(v, Vector3::new(-1.5, 2.25, -0.0));
        v.invert();
        assert_eq!(v, original);
    }

    #[test]
    fn test_magnitude_3_4_5() {
        assert_eq!(Vector3::new(3.0, 4.0, 0.0).magnitude(), 5.0);
        assert_eq!(Vector3::new(3.0, 4.0, 0.0).square_magnitude(), 25.0);
    }

    #[test]
    fn test_normalize_nonzero() {
        let mut v = Vector3::new(3.0, 4.0, 12.0);
        v.normalize();
        assert_relative_eq!(v.magnitude(), 1.0, epsilon = 1e-5);
        assert_vec_near(v, Vector3::new(3.0 / 13.0, 4.0 / 13.0, 12.0 / 13.0));
    }

    #[test]
    fn test_normalize_zero_is_noop() {
        let mut v = Vector3::zero();
        v.normalize();
        assert_eq!(v, Vector3::zero());
    }

    #[test]
    fn test_normalize_nan_is_noop() {
        let mut v = Vector3::new(Real::NAN, 1.0, 1.0);
        v.normalize();
        assert!(v.x.is_nan());
        assert_eq!(v.y, 1.0);
    }

    #[test]
    fn test_normalized_leaves_original() {
        let v = Vector3::new(0.0, 0.0, 4.0);
        assert_eq!(v.normalized(), Vector3::Z);
        assert_eq!(v, Vector3::new(0.0, 0.0, 4.0));
    }

    #[test]
    fn test_try_normalize_rejects_zero_and_non_finite() {
        let mut zero = Vector3::zero();
        assert_eq!(
            zero.try_normalize(),
            Err(CycloneError::ZeroMagnitude {
                operation: "normalize"
            })
        );
        assert_eq!(zero, Vector3::zero());

        let mut inf = Vector3::new(Real::INFINITY, 0.0, 0.0);
        assert_eq!(
            inf.try_normalize(),
            Err(CycloneError::NonFinite {
                operation: "normalize"
            })
        );
        assert_eq!(inf.x, Real::INFINITY);

        let mut v = Vector3::new(0.0, -2.0, 0.0);
        assert_eq!(v.try_normalize(), Ok(()));
        assert_eq!(v, -Vector3::Y);
    }

    #[test]
    fn test_try_normalize_handles_extreme_magnitudes() {
        // Squared length overflows Real
        let mut huge = Vector3::new(1e20, 0.0, 0.0);
        assert_eq!(huge.try_normalize(), Ok(()));
        assert_eq!(huge, Vector3::X);

        let mut max = Vector3::new(Real::MAX / 2.0, -Real::MAX / 2.0, 0.0);
        assert_eq!(max.try_normalize(), Ok(()));
        assert!(max.is_finite());
        assert_relative_eq!(max.magnitude(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(max.x, -max.y, epsilon = 1e-6);

        // Squared length underflows to zero
        let mut tiny = Vector3::new(0.0, 1e-30, 0.0);
        assert_eq!(tiny.try_normalize(), Ok(()));
        assert_eq!(tiny, Vector3::Y);
    }

    #[test]
    fn test_try_angle_between_large_vectors() {
        let a = Vector3::new(1e20, 0.0, 0.0);
        assert_eq!(a.try_angle_between(&a), Ok(Radians::new(0.0)));

        let b = Vector3::new(0.0, 3e20, 0.0);
        let angle = a.try_angle_between(&b).unwrap();
        assert_relative_eq!(*angle, crate::precision::REAL_PI / 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_serde_round_trip() {
        let v = Vector3::new(1.0, -2.5, 0.0);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"x":1.0,"y":-2.5,"z":0.0}"#);
        let back: Vector3 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn test_add_scaled_vector() {
        let mut v = Vector3::new(1.0, 1.0, 1.0);
        v.add_scaled_vector(&Vector3::new(1.0, 2.0, 3.0), 2.0);
        assert_eq!(v, Vector3::new(3.0, 5.0, 7.0));
    }

    #[test]
    fn test_component_product() {
        let a = Vector3::new(2.0, 2.0, 2.0);
        let b = Vector3::new(3.0, 4.0, 5.0);
        assert_eq!(a.component_product(&b), Vector3::new(6.0, 8.0, 10.0));

        let mut c = a;
        c.component_product_update(&b);
        assert_eq!(c, Vector3::new(6.0, 8.0, 10.0));
    }

    #[test]
    fn test_scalar_product_and_operator() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, -5.0, 6.0);
        assert_eq!(a.scalar_product(&b), 12.0);
        assert_eq!(a * b, 12.0);
    }

    #[test]
    fn test_cross_product_basis() {
        assert_eq!(Vector3::X.vector_product(&Vector3::Y), Vector3::Z);
        assert_eq!(Vector3::Y % Vector3::Z, Vector3::X);
        assert_eq!(Vector3::Z % Vector3::X, Vector3::Y);

        let mut v = Vector3::Y;
        v %= Vector3::X;
        assert_eq!(v, -Vector3::Z);
    }

    #[test]
    fn test_angle_between_right_angle() {
        let deg = Vector3::X.angle_between_degrees(&Vector3::Y);
        assert_relative_eq!(deg, 90.0, epsilon = 1e-3);
        let rad = Vector3::new(5.0, 0.0, 0.0).angle_between_radians(&Vector3::new(0.0, 0.0, 2.0));
        assert_relative_eq!(rad, crate::precision::REAL_PI / 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_angle_between_does_not_mutate_operands() {
        let a = Vector3::new(2.0, 0.0, 0.0);
        let b = Vector3::new(3.0, 3.0, 0.0);
        let deg = a.angle_between_degrees(&b);
        assert_relative_eq!(deg, 45.0, epsilon = 1e-3);
        assert_eq!(a, Vector3::new(2.0, 0.0, 0.0));
        assert_eq!(b, Vector3::new(3.0, 3.0, 0.0));
    }

    #[test]
    fn test_angle_between_zero_vector_is_nan() {
        assert!(Vector3::zero().angle_between_radians(&Vector3::X).is_nan());
        assert!(Vector3::X.angle_between_degrees(&Vector3::zero()).is_nan());
        assert!(Vector3::zero().angle_between(&Vector3::zero()).is_nan());
    }

    #[test]
    fn test_try_angle_between() {
        let angle = Vector3::X.try_angle_between(&-Vector3::X).unwrap();
        assert_relative_eq!(*angle, crate::precision::REAL_PI, epsilon = 1e-5);

        let same = Vector3::new(0.1, 0.2, 0.3);
        assert_eq!(same.try_angle_between(&same).map(|r| r.is_nan()), Ok(false));

        assert!(matches!(
            Vector3::zero().try_angle_between(&Vector3::X),
            Err(CycloneError::ZeroMagnitude { .. })
        ));
        assert!(matches!(
            Vector3::X.try_angle_between_degrees(&Vector3::new(0.0, Real::NAN, 0.0)),
            Err(CycloneError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_add_sub_operators() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(a - b, Vector3::new(-3.0, -3.0, -3.0));

        let mut c = a;
        c += b;
        assert_eq!(c, Vector3::new(5.0, 7.0, 9.0));
        c -= b;
        assert_eq!(c, a);
    }

    #[test]
    fn test_scalar_multiply() {
        let a = Vector3::new(1.0, -2.0, 0.5);
        assert_eq!(a * 2.0, Vector3::new(2.0, -4.0, 1.0));
        let mut b = a;
        b *= -1.0;
        assert_eq!(b, -a);
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector3::new(1.0, 2.0, 3.0).to_string(), "(1, 2, 3)");
        assert_eq!(Vector3::new(0.5, -1.25, 0.0).to_string(), "(0.5, -1.25, 0)");
        assert_eq!(
            Vector3::new(Real::NAN, Real::INFINITY, 0.0).to_string(),
            "(NaN, inf, 0)"
        );
    }

    #[test]
    fn test_nalgebra_conversion() {
        let v = Vector3::new(1.0, -2.0, 3.5);
        let na: nalgebra::Vector3<Real> = v.into();
        assert_eq!(na.x, 1.0);
        assert_eq!(Vector3::from(na), v);

        let arr: [Real; 3] = v.into();
        assert_eq!(Vector3::from(arr), v);
    }
}
