use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

use cyclone_core::CycloneError;

/// Common interface for errors crossing the FFI boundary.
///
/// - `code()` - Returns the error code to be passed across FFI boundary
/// - `msg()` - Returns the error message for diagnostic purposes
pub(crate) trait FfiError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> CycloneErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `FfiError` for the FFI layer's own failures
/// and for wrapped core errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultFfiError {
    code: CycloneErrorCode,
    msg: String,
}

impl DefaultFfiError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"vector"`, `"buffer"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: CycloneErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for an output buffer that cannot hold the result.
    ///
    /// # Arguments
    /// * `required` - Bytes needed, including the NUL terminator
    /// * `provided` - Bytes the caller supplied
    pub fn buffer_too_small(required: usize, provided: usize) -> Self {
        Self {
            code: CycloneErrorCode::BufferTooSmall,
            msg: format!("Buffer too small: need {required} bytes, got {provided}"),
        }
    }
}

impl From<CycloneError> for DefaultFfiError {
    fn from(error: CycloneError) -> Self {
        let code = match error {
            CycloneError::ZeroMagnitude { .. } => CycloneErrorCode::ZeroMagnitude,
            CycloneError::NonFinite { .. } => CycloneErrorCode::NonFinite,
            CycloneError::OutOfRange { .. } => CycloneErrorCode::InvalidParameter,
        };
        Self {
            code,
            msg: error.to_string(),
        }
    }
}

impl FfiError for DefaultFfiError {
    fn code(&self) -> CycloneErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by Cyclone functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycloneErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// Vector had zero magnitude where a direction was required.
    ZeroMagnitude = 2,

    /// Vector had a NaN or infinite component.
    NonFinite = 3,

    /// Output buffer too small for the result.
    BufferTooSmall = 4,

    /// Invalid parameter passed to function.
    InvalidParameter = 5,
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    /// The `CString` is stored here so the pointer handed to C stays valid.
    static LAST_ERROR: RefCell<(Option<CString>, CycloneErrorCode)> = const { RefCell::new((None, CycloneErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, CycloneErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, CycloneErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if an error occurred.
/// - `null` if no error has occurred.
///
/// # Thread Safety
/// Error messages are stored per-thread, so each thread sees only its own
/// failures.
///
/// # Lifetime
/// The returned pointer is valid until the next FFI call on this thread that
/// sets or clears the error. **DO NOT FREE THIS POINTER.**
///
/// Example:
/// ```c
/// CycloneVector3 v = {0.0f, 0.0f, 0.0f};
/// if (cyclone_vector3_try_normalize(&v) != Ok) {
///     const char* error = cyclone_get_last_error();
///     if (error) {
///         printf("normalize failed: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn cyclone_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code, or `Ok` if nothing has failed
/// on this thread since the last clear.
#[no_mangle]
pub extern "C" fn cyclone_get_last_error_code() -> CycloneErrorCode {
    with_last_error(|(_cstring, code)| *code)
}

/// Reset this thread's error state to `Ok`.
#[no_mangle]
pub extern "C" fn cyclone_clear_last_error() {
    crate::helpers::clear_last_error();
}
