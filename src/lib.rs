//! # growvec
//!
//! This crate provides a resizable array whose capacity growth is delegated to a
//! caller-supplied policy. The container starts with room for ten elements and,
//! by default, doubles its capacity whenever an append or insert finds it full.
//!
//! Elements live in a reference-counted buffer shared with forward
//! [`Cursor`]s. A cursor keeps the buffer it was created over alive, so it never
//! dangles, but after a reallocation it observes the old buffer. Each
//! reallocation bumps the vector's generation, which
//! [`Vector::check_cursor`] uses to report such stale cursors.
//!
//! ```rust
//! use growvec::{vector, GrowthPolicy, Vector};
//!
//! let mut v = vector![1, 2, 3];
//! v.append(4);
//! assert_eq!(v.iter().sum::<i32>(), 10);
//!
//! let mut slow = Vector::with_policy(GrowthPolicy::fixed(1));
//! for i in 0..11 {
//!     slow.append(i);
//! }
//! assert_eq!(slow.capacity(), 11);
//! ```

pub mod cursor;
pub mod error;
pub mod growth;
pub mod vector;

pub use cursor::Cursor;
pub use error::{Result, VectorError};
pub use growth::GrowthPolicy;
pub use vector::{Iter, Vector, DEFAULT_CAPACITY};

/// Builds a [`Vector`] from a literal list of values, appending them in order.
///
/// ```rust
/// use growvec::vector;
///
/// let v = vector!["a", "b"];
/// assert_eq!(v.size(), 2);
/// let empty: growvec::Vector<u8> = vector![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        $crate::Vector::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Vector::from_values([$($value),+])
    };
}
