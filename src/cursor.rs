//! # Cursors over a vector's backing buffer
//!
//! A [`Cursor`] is a position plus a shared handle to the buffer its
//! [`Vector`](crate::Vector) held when the cursor was created. Holding the
//! handle keeps that buffer alive, so a cursor never dangles. It does not follow
//! the container, though: once the container reallocates, the cursor keeps
//! reading the old buffer.
//!
//! Cursors record the container's generation at creation time. Use
//! [`Vector::check_cursor`](crate::Vector::check_cursor) or
//! [`Vector::cursor_get`](crate::Vector::cursor_get) to turn a stale view into
//! an error instead of silently reading old data.
//!
//! ## Example
//!
//! ```rust
//! use growvec::Vector;
//!
//! let v = Vector::from_values([1, 2, 3]);
//! let mut it = v.begin();
//! let end = v.end();
//! let mut seen = Vec::new();
//! while it != end {
//!     seen.push(*it.get().unwrap());
//!     it.pre_increment();
//! }
//! assert_eq!(seen, [1, 2, 3]);
//! ```

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::mem;
use std::rc::Rc;

pub(crate) type SharedBuffer<T> = Rc<RefCell<Box<[T]>>>;

/// A forward cursor over a vector's buffer.
///
/// Equality compares positions only. Two cursors over *different* buffers with
/// the same position compare equal; use [`Cursor::same_buffer`] when buffer
/// identity matters.
pub struct Cursor<T> {
    position: usize,
    buffer: Option<SharedBuffer<T>>,
    generation: u64,
}

impl<T> Cursor<T> {
    /// Returns a null cursor at position 0 that references no buffer.
    pub fn null() -> Self {
        Self { position: 0, buffer: None, generation: 0 }
    }

    pub(crate) fn new(position: usize, buffer: SharedBuffer<T>, generation: u64) -> Self {
        Self { position, buffer: Some(buffer), generation }
    }

    /// Returns the position of this cursor.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the container generation this cursor was created in.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns `true` if this cursor references no buffer.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.buffer.is_none()
    }

    pub(crate) fn buffer(&self) -> Option<&SharedBuffer<T>> {
        self.buffer.as_ref()
    }

    /// Moves the cursor forward and returns it.
    pub fn pre_increment(&mut self) -> &mut Self {
        self.position = self.position.wrapping_add(1);
        self
    }

    /// Moves the cursor forward and returns a copy of its previous state.
    pub fn post_increment(&mut self) -> Self {
        let previous = self.clone();
        self.position = self.position.wrapping_add(1);
        previous
    }

    /// Moves the cursor backward and returns it.
    pub fn pre_decrement(&mut self) -> &mut Self {
        self.position = self.position.wrapping_sub(1);
        self
    }

    /// Moves the cursor backward and returns a copy of its previous state.
    pub fn post_decrement(&mut self) -> Self {
        let previous = self.clone();
        self.position = self.position.wrapping_sub(1);
        previous
    }

    /// Moves out of this cursor, leaving a null cursor behind.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Returns the element under the cursor, or `None` for a null cursor, a
    /// position past the end of the referenced buffer, or a buffer that is
    /// mutably borrowed elsewhere.
    ///
    /// No check is made against the container's current size: slots between
    /// size and capacity hold stale values.
    pub fn get(&self) -> Option<Ref<'_, T>> {
        let slots = self.buffer.as_ref()?.try_borrow().ok()?;
        Ref::filter_map(slots, |slots| slots.get(self.position)).ok()
    }

    /// Returns a mutable handle to the element under the cursor. Writes are
    /// visible to the container as long as it still uses this buffer.
    ///
    /// Returns `None` in the same cases as [`Cursor::get`], and also while any
    /// other guard borrows the buffer.
    pub fn get_mut(&self) -> Option<RefMut<'_, T>> {
        let slots = self.buffer.as_ref()?.try_borrow_mut().ok()?;
        RefMut::filter_map(slots, |slots| slots.get_mut(self.position)).ok()
    }

    /// Overwrites the element under the cursor. Returns `false` when there is
    /// no such element.
    pub fn set(&self, value: T) -> bool {
        match self.get_mut() {
            Some(mut slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Returns `true` if both cursors reference the same buffer (or both are null).
    pub fn same_buffer(&self, other: &Self) -> bool {
        match (&self.buffer, &other.buffer) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T> Default for Cursor<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T> Clone for Cursor<T> {
    fn clone(&self) -> Self {
        Self {
            position: self.position,
            buffer: self.buffer.clone(),
            generation: self.generation,
        }
    }
}

impl<T> PartialEq for Cursor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl<T> Eq for Cursor<T> {}

impl<T> fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .field("generation", &self.generation)
            .field("null", &self.is_null())
            .finish()
    }
}
