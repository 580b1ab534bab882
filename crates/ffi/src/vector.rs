use cyclone_core::Vector3;
use std::os::raw::c_char;
use std::slice;

use crate::error::{CycloneErrorCode, DefaultFfiError};
use crate::helpers::{clear_last_error, track_error, track_result};

/// Scalar type shared with `cyclone_core::Real`.
#[cfg(not(feature = "double-precision"))]
pub type CycloneReal = f32;

/// Scalar type shared with `cyclone_core::Real`.
#[cfg(feature = "double-precision")]
pub type CycloneReal = f64;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
/// C-compatible 3D vector. Keep this layout stable for C/C++ consumers.
pub struct CycloneVector3 {
    /// X component
    pub x: CycloneReal,
    /// Y component
    pub y: CycloneReal,
    /// Z component
    pub z: CycloneReal,
}

impl From<Vector3> for CycloneVector3 {
    fn from(v: Vector3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<CycloneVector3> for Vector3 {
    fn from(v: CycloneVector3) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

/// Borrow a caller-owned vector mutably, recording `NullPointer` on null.
///
/// # Safety
/// `ptr` must be null or point to a valid, writable `CycloneVector3`.
unsafe fn vector_from_ptr<'a>(
    ptr: *mut CycloneVector3,
    name: &str,
) -> Result<&'a mut CycloneVector3, CycloneErrorCode> {
    if ptr.is_null() {
        return Err(track_error(&DefaultFfiError::null_pointer(name)));
    }
    Ok(&mut *ptr)
}

/// Apply an in-place operation to a caller-owned vector.
///
/// # Safety
/// Same as [`vector_from_ptr`].
unsafe fn update_in_place(
    ptr: *mut CycloneVector3,
    f: impl FnOnce(&mut Vector3),
) -> CycloneErrorCode {
    match vector_from_ptr(ptr, "vector") {
        Ok(out) => {
            let mut v = Vector3::from(*out);
            f(&mut v);
            *out = v.into();
            clear_last_error();
            CycloneErrorCode::Ok
        }
        Err(code) => code,
    }
}

// ============================================================================
// CONSTRUCTION
// ============================================================================

/// Build a vector from three components.
#[no_mangle]
pub extern "C" fn cyclone_vector3_new(
    x: CycloneReal,
    y: CycloneReal,
    z: CycloneReal,
) -> CycloneVector3 {
    Vector3::new(x, y, z).into()
}

/// The zero vector.
#[no_mangle]
pub extern "C" fn cyclone_vector3_zero() -> CycloneVector3 {
    Vector3::zero().into()
}

// ============================================================================
// PURE QUERIES AND COPY-RETURNING ARITHMETIC
// ============================================================================

/// Length of `v`.
#[no_mangle]
pub extern "C" fn cyclone_vector3_magnitude(v: CycloneVector3) -> CycloneReal {
    Vector3::from(v).magnitude()
}

/// Squared length of `v`.
#[no_mangle]
pub extern "C" fn cyclone_vector3_square_magnitude(v: CycloneVector3) -> CycloneReal {
    Vector3::from(v).square_magnitude()
}

/// `a + b`
#[no_mangle]
pub extern "C" fn cyclone_vector3_add(a: CycloneVector3, b: CycloneVector3) -> CycloneVector3 {
    (Vector3::from(a) + Vector3::from(b)).into()
}

/// `a - b`
#[no_mangle]
pub extern "C" fn cyclone_vector3_sub(a: CycloneVector3, b: CycloneVector3) -> CycloneVector3 {
    (Vector3::from(a) - Vector3::from(b)).into()
}

/// `v * scale`
#[no_mangle]
pub extern "C" fn cyclone_vector3_scale(v: CycloneVector3, scale: CycloneReal) -> CycloneVector3 {
    (Vector3::from(v) * scale).into()
}

/// Component-wise product of `a` and `b`.
#[no_mangle]
pub extern "C" fn cyclone_vector3_component_product(
    a: CycloneVector3,
    b: CycloneVector3,
) -> CycloneVector3 {
    Vector3::from(a).component_product(&b.into()).into()
}

/// Dot product of `a` and `b`.
#[no_mangle]
pub extern "C" fn cyclone_vector3_scalar_product(a: CycloneVector3, b: CycloneVector3) -> CycloneReal {
    Vector3::from(a).scalar_product(&b.into())
}

/// Right-handed cross product `a × b`.
#[no_mangle]
pub extern "C" fn cyclone_vector3_vector_product(
    a: CycloneVector3,
    b: CycloneVector3,
) -> CycloneVector3 {
    Vector3::from(a).vector_product(&b.into()).into()
}

/// Angle between `a` and `b` in radians. NaN if either is the zero vector.
#[no_mangle]
pub extern "C" fn cyclone_vector3_angle_between_radians(
    a: CycloneVector3,
    b: CycloneVector3,
) -> CycloneReal {
    Vector3::from(a).angle_between_radians(&b.into())
}

/// Angle between `a` and `b` in degrees. NaN if either is the zero vector.
#[no_mangle]
pub extern "C" fn cyclone_vector3_angle_between_degrees(
    a: CycloneVector3,
    b: CycloneVector3,
) -> CycloneReal {
    Vector3::from(a).angle_between_degrees(&b.into())
}

// ============================================================================
// IN-PLACE OPERATIONS
// ============================================================================

/// Negate `*vector` in place.
///
/// # Safety
/// `vector` must be null or point to a valid, writable `CycloneVector3`.
#[no_mangle]
pub unsafe extern "C" fn cyclone_vector3_invert(vector: *mut CycloneVector3) -> CycloneErrorCode {
    update_in_place(vector, Vector3::invert)
}

/// Normalize `*vector` in place. The zero vector is left unchanged and still
/// reports `Ok`; use `cyclone_vector3_try_normalize` to detect it.
///
/// # Safety
/// `vector` must be null or point to a valid, writable `CycloneVector3`.
#[no_mangle]
pub unsafe extern "C" fn cyclone_vector3_normalize(vector: *mut CycloneVector3) -> CycloneErrorCode {
    update_in_place(vector, Vector3::normalize)
}

/// Normalize `*vector` in place, failing with `ZeroMagnitude` or `NonFinite`
/// for degenerate input. On failure the vector is unchanged and the reason
/// is available from `cyclone_get_last_error`.
///
/// # Safety
/// `vector` must be null or point to a valid, writable `CycloneVector3`.
#[no_mangle]
pub unsafe extern "C" fn cyclone_vector3_try_normalize(
    vector: *mut CycloneVector3,
) -> CycloneErrorCode {
    match vector_from_ptr(vector, "vector") {
        Ok(out) => {
            let mut v = Vector3::from(*out);
            let result = v.try_normalize();
            if result.is_ok() {
                *out = v.into();
            }
            track_result(result)
        }
        Err(code) => code,
    }
}

/// `*vector += other * scale`
///
/// # Safety
/// `vector` must be null or point to a valid, writable `CycloneVector3`.
#[no_mangle]
pub unsafe extern "C" fn cyclone_vector3_add_scaled_vector(
    vector: *mut CycloneVector3,
    other: CycloneVector3,
    scale: CycloneReal,
) -> CycloneErrorCode {
    update_in_place(vector, |v| v.add_scaled_vector(&other.into(), scale))
}

// ============================================================================
// TEXT
// ============================================================================

/// Write `"(x, y, z)"` into `buffer` as a NUL-terminated string.
///
/// Fails with `BufferTooSmall` (writing nothing) if `len` cannot hold the
/// text plus terminator.
///
/// # Safety
/// `buffer` must be null or valid for writes of `len` bytes.
#[no_mangle]
pub unsafe extern "C" fn cyclone_vector3_format(
    v: CycloneVector3,
    buffer: *mut c_char,
    len: usize,
) -> CycloneErrorCode {
    if buffer.is_null() {
        return track_error(&DefaultFfiError::null_pointer("buffer"));
    }
    let text = Vector3::from(v).to_string();
    let required = text.len() + 1;
    if required > len {
        return track_error(&DefaultFfiError::buffer_too_small(required, len));
    }
    let out = slice::from_raw_parts_mut(buffer.cast::<u8>(), required);
    out[..text.len()].copy_from_slice(text.as_bytes());
    out[text.len()] = 0;
    clear_last_error();
    CycloneErrorCode::Ok
}
