//! Error taxonomy for the FFI boundary (§7).
//!
//! The safe core (`crate::squeeze`/`crate::squeeze_ex`) is a pure transform
//! that never fails — it returns a plain `Vec<u8>`. `SqueezeError` exists
//! only for [`crate::ffi`], which must translate "null output pointer",
//! "null input with non-zero length", and "allocation failure" into a status
//! code for C callers that cannot receive a Rust `Result`.

use thiserror::Error;

/// Errors the FFI boundary can report, each mapped to one status code.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum SqueezeError {
    /// The caller-supplied output sink pointer was null.
    #[error("output buffer pointer is null")]
    NullOutput,

    /// The caller-supplied input pointer was null but the declared length
    /// was non-zero.
    #[error("input pointer is null for a non-zero length")]
    NullInput,

    /// The allocator could not satisfy a request for the output buffer.
    #[error("allocation failed while producing the output buffer")]
    AllocFailure,

    /// An unexpected condition was caught at the top-level FFI boundary
    /// (e.g. a panic unwind from the safe core).
    #[error("internal error")]
    Internal,
}

impl SqueezeError {
    /// Status code per §7 ("design-level, not bit-exact"). `0` is reserved
    /// for success and is never returned by this type; the remaining codes
    /// are assigned in stable declaration order.
    pub fn status_code(self) -> i32 {
        match self {
            SqueezeError::NullOutput => 1,
            SqueezeError::AllocFailure => 2,
            SqueezeError::Internal => 3,
            SqueezeError::NullInput => 4,
        }
    }
}

/// Status code for a successful call — never produced by [`SqueezeError`].
pub const STATUS_SUCCESS: i32 = 0;
