//! Errors returned by [`Vector`](crate::Vector) and its cursors.
use thiserror::Error;

/// Errors returned by the container.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum VectorError {
    /// Returned when an index falls outside the logically occupied range.
    #[error("index {index} out of bounds for size {size}")]
    OutOfBounds { index: usize, size: usize },
    /// Returned by checked cursor access when the container has replaced the
    /// buffer the cursor was created over.
    #[error("cursor from generation {cursor} used after reallocation (now generation {current})")]
    StaleCursor { cursor: u64, current: u64 },
    /// Returned by checked cursor access on a default-constructed cursor.
    #[error("cursor does not reference a buffer")]
    NullCursor,
    /// Returned when a guard handed out by a cursor still holds the buffer in
    /// a conflicting borrow.
    #[error("buffer is borrowed through an outstanding cursor guard")]
    BufferBorrowed,
}

/// Shorthand for results carrying a [`VectorError`].
pub type Result<T, E = VectorError> = std::result::Result<T, E>;
