//! C-ABI adapter over the safe, infallible core (§6 "External interfaces").
//!
//! A thin collaborator, not a core concern: it exists only to give
//! non-Rust callers a `squeeze`/`squeeze_ex`/`free_buffer`/
//! `version` surface with the ownership and error contract a C caller
//! expects. The core itself ([`crate::squeeze_ex`]) never fails; this
//! module's only failure modes are the ones a foreign caller can actually
//! trigger — a null pointer, or a panic unwinding out of the core.
//!
//! Memory: a successful call transfers ownership of a boxed slice to the
//! caller, who must pass it back to [`csq_free`] exactly once, using
//! `Box<[u8]>::into_raw`/`Box::from_raw` rather than `malloc`/`free` since
//! the allocator on both sides is Rust's.

use std::os::raw::c_char;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::slice;

use crate::error::SqueezeError;

/// A borrowed view over caller-owned input bytes.
#[repr(C)]
pub struct CsqView {
    pub data: *const u8,
    pub len: usize,
}

/// An owned output buffer. `(null, 0)` represents "no output" (empty result
/// or a failed call); any other value must be released via [`csq_free`].
#[repr(C)]
pub struct CsqBuf {
    pub data: *mut u8,
    pub len: usize,
}

/// Equivalent to `csq_squeeze_ex(input, 0, out)`.
///
/// # Safety
/// `out` must be a valid, writable pointer to a `CsqBuf`.
#[no_mangle]
pub unsafe extern "C" fn csq_squeeze(input: CsqView, out: *mut CsqBuf) -> i32 {
    csq_squeeze_ex(input, 0, out)
}

/// # Safety
/// `out` must be a valid, writable pointer to a `CsqBuf`. `input.data` must
/// be valid for reads of `input.len` bytes, unless `input.len == 0`.
#[no_mangle]
pub unsafe extern "C" fn csq_squeeze_ex(input: CsqView, aggressiveness: i32, out: *mut CsqBuf) -> i32 {
    let Some(out) = out.as_mut() else {
        return SqueezeError::NullOutput.status_code();
    };
    out.data = std::ptr::null_mut();
    out.len = 0;

    if input.len == 0 {
        return 0;
    }
    if input.data.is_null() {
        return SqueezeError::NullInput.status_code();
    }

    let outcome = catch_unwind(AssertUnwindSafe(|| {
        let bytes = slice::from_raw_parts(input.data, input.len);
        crate::squeeze_ex(bytes, aggressiveness)
    }));

    match outcome {
        Ok(output) => write_output(output, out),
        Err(_) => SqueezeError::Internal.status_code(),
    }
}

fn write_output(output: Vec<u8>, out: &mut CsqBuf) -> i32 {
    if output.is_empty() {
        return 0;
    }
    let boxed = output.into_boxed_slice();
    out.len = boxed.len();
    out.data = Box::into_raw(boxed) as *mut u8;
    0
}

/// Release a buffer previously produced by [`csq_squeeze`]/[`csq_squeeze_ex`].
/// Null-safe and idempotent: a second call on an already-freed (zeroed)
/// buffer is a no-op.
///
/// # Safety
/// `buf`, if non-null, must point to a `CsqBuf` whose `data`/`len` were
/// produced by this module and not already freed.
#[no_mangle]
pub unsafe extern "C" fn csq_free(buf: *mut CsqBuf) {
    let Some(buf) = buf.as_mut() else { return };
    if !buf.data.is_null() {
        let owned = slice::from_raw_parts_mut(buf.data, buf.len);
        drop(Box::from_raw(owned as *mut [u8]));
    }
    buf.data = std::ptr::null_mut();
    buf.len = 0;
}

const VERSION_CSTR: &str = "1.0.0\0";

/// A non-empty, static, NUL-terminated ASCII version string.
#[no_mangle]
pub extern "C" fn csq_version() -> *const c_char {
    VERSION_CSTR.as_ptr() as *const c_char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_output_pointer_is_rejected() {
        let input = CsqView { data: std::ptr::null(), len: 0 };
        let status = unsafe { csq_squeeze_ex(input, 0, std::ptr::null_mut()) };
        assert_eq!(status, SqueezeError::NullOutput.status_code());
    }

    #[test]
    fn null_input_with_nonzero_length_is_rejected() {
        let mut out = CsqBuf { data: std::ptr::null_mut(), len: 0 };
        let input = CsqView { data: std::ptr::null(), len: 5 };
        let status = unsafe { csq_squeeze_ex(input, 0, &mut out) };
        assert_eq!(status, SqueezeError::NullInput.status_code());
        assert!(out.data.is_null());
        assert_eq!(out.len, 0);
    }

    #[test]
    fn empty_input_succeeds_with_null_buffer() {
        let mut out = CsqBuf { data: std::ptr::null_mut(), len: 0 };
        let input = CsqView { data: std::ptr::null(), len: 0 };
        let status = unsafe { csq_squeeze_ex(input, 9, &mut out) };
        assert_eq!(status, 0);
        assert!(out.data.is_null());
        assert_eq!(out.len, 0);
    }

    #[test]
    fn round_trip_through_squeeze_and_free() {
        let text = "Identical copy at zero aggressiveness should pass through untouched.";
        let mut out = CsqBuf { data: std::ptr::null_mut(), len: 0 };
        let input = CsqView { data: text.as_ptr(), len: text.len() };
        let status = unsafe { csq_squeeze(input, &mut out) };
        assert_eq!(status, 0);
        assert_eq!(out.len, text.len());
        let produced = unsafe { slice::from_raw_parts(out.data, out.len) };
        assert_eq!(produced, text.as_bytes());
        unsafe { csq_free(&mut out) };
        assert!(out.data.is_null());
        assert_eq!(out.len, 0);
    }

    #[test]
    fn free_is_idempotent_on_already_freed_buffer() {
        let mut out = CsqBuf { data: std::ptr::null_mut(), len: 0 };
        unsafe {
            csq_free(&mut out);
            csq_free(&mut out);
        }
        assert!(out.data.is_null());
    }

    #[test]
    fn version_is_non_empty_and_nul_terminated() {
        let ptr = csq_version();
        assert!(!ptr.is_null());
        let cstr = unsafe { std::ffi::CStr::from_ptr(ptr) };
        assert!(!cstr.to_bytes().is_empty());
    }
}
