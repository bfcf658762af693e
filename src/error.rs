//! Recoverable errors.
//!
//! Precondition violations (reading an exhausted range, indexing out of
//! bounds) are programmer errors and panic in debug builds; capability
//! mismatches never compile. What remains recoverable is the allocator
//! refusing a count-then-allocate request, and text output that is not valid
//! UTF-8.

use alloc::collections::TryReserveError;
use alloc::string::FromUtf8Error;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RangeError {
    #[error("Allocation of {requested} elements failed: {source}")]
    Alloc {
        requested: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("Output is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

pub type RangeResult<T> = Result<T, RangeError>;

/// Extension trait for attaching the requested size to reservation errors.
pub trait ReserveResultExt<T> {
    fn map_alloc_err(self, requested: usize) -> RangeResult<T>;
}

impl<T> ReserveResultExt<T> for Result<T, TryReserveError> {
    #[inline]
    fn map_alloc_err(self, requested: usize) -> RangeResult<T> {
        self.map_err(|source| {
            tracing::warn!(requested, error = %source, "reservation failed");
            RangeError::Alloc { requested, source }
        })
    }
}
