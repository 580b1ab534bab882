use crate::error::{with_last_error_mut, CycloneErrorCode, DefaultFfiError, FfiError};
use std::ffi::CString;
use tracing::debug;

/// Set the thread-local error message and code.
/// Accepts any type implementing `FfiError` trait.
pub(crate) fn set_last_error(error: &impl FfiError) {
    debug!(code = ?error.code(), "FFI call failed: {}", error.msg());
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl FfiError) -> CycloneErrorCode {
    set_last_error(error);
    error.code()
}

/// Convert a result into an FFI code, recording the error on failure and
/// clearing stale error state on success.
pub(crate) fn track_result<E>(result: Result<(), E>) -> CycloneErrorCode
where
    DefaultFfiError: From<E>,
{
    match result {
        Ok(()) => {
            clear_last_error();
            CycloneErrorCode::Ok
        }
        Err(e) => track_error(&DefaultFfiError::from(e)),
    }
}

/// Clear the thread-local error message and code.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = CycloneErrorCode::Ok;
    });
}
