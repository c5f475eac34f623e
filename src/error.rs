//! Error types for the `probe-hash` crate.
//!
//! Every operation that may allocate comes in two versions:
//!
//! - A fallible `try_xxx` version, which returns a `Result` with [`Error`] as
//!   the error type and leaves the container untouched on failure.
//! - A convenience `xxx` version, which invokes the `try_xxx` version and
//!   panics in case of error.

/// Errors raised while sizing or allocating container buffers.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The requested number of elements needs a buffer larger than
    /// [`MAX_BUFFER_SIZE`](crate::sizing::MAX_BUFFER_SIZE) slots.
    #[error("maximum buffer size exceeded (elements: {elements}, load factor: {load_factor})")]
    CapacityOverflow {
        /// Number of elements the container was asked to hold.
        elements: usize,
        /// Load factor of the container.
        load_factor: f64,
    },

    /// The allocator could not provide a buffer of the given length.
    #[error("could not allocate a buffer of {slots} slots")]
    AllocationFailed {
        /// Length of the buffer that was requested.
        slots: usize,
    },

    /// The load factor is outside of the accepted range.
    #[error("the load factor should be in range [{min:.2}, {max:.2}]: {load_factor}")]
    InvalidLoadFactor {
        /// The rejected load factor.
        load_factor: f64,
        /// Smallest accepted load factor.
        min: f64,
        /// Largest accepted load factor.
        max: f64,
    },
}

/// Panics with the message of `error`.
///
/// Used by the infallible counterparts of the `try_xxx` operations.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn capacity_panic(error: Error) -> ! {
    panic!("{error}")
}
