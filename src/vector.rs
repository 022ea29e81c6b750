//! # Vector with pluggable growth
//!
//! [`Vector`] stores its elements in a reference-counted buffer of `capacity`
//! slots, of which the first `size` are logically present. When an append or
//! insert finds the buffer full, the container asks its [`GrowthPolicy`] for a
//! new capacity, copies the live elements into a fresh buffer and swaps the
//! handle. Cursors created earlier keep the old buffer alive.
//!
//! ## Example
//!
//! ```rust
//! use growvec::{Vector, VectorError};
//!
//! let mut v = Vector::from_values([1, 2, 3]);
//! assert_eq!((v.size(), v.capacity()), (3, 10));
//!
//! v.insert(1, 99).unwrap();
//! assert_eq!(v.to_vec(), [1, 99, 2, 3]);
//!
//! v.remove(0).unwrap();
//! assert_eq!(*v.get(0).unwrap(), 99);
//!
//! assert_eq!(v.remove(3), Err(VectorError::OutOfBounds { index: 3, size: 3 }));
//! ```

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::iter::FusedIterator;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::cursor::{Cursor, SharedBuffer};
use crate::error::{Result, VectorError};
use crate::growth::GrowthPolicy;

/// Capacity of a freshly constructed vector holding at most this many elements.
pub const DEFAULT_CAPACITY: usize = 10;

fn allocate<T: Default>(capacity: usize) -> SharedBuffer<T> {
    let slots: Box<[T]> = std::iter::repeat_with(T::default).take(capacity).collect();
    Rc::new(RefCell::new(slots))
}

/// A resizable array with a configurable growth policy.
///
/// Unlike `Vec`, element access goes through `Ref`/`RefMut` guards because the
/// buffer is shared with outstanding [`Cursor`]s. While a guard obtained from a
/// cursor is alive, conflicting `Result`-returning operations fail with
/// [`VectorError::BufferBorrowed`]; the infallible ones panic.
pub struct Vector<T> {
    buffer: SharedBuffer<T>,
    size: usize,
    capacity: usize,
    generation: u64,
    policy: GrowthPolicy,
}

impl<T: Default + Clone> Vector<T> {
    /// Creates an empty vector with the default capacity and doubling growth.
    pub fn new() -> Self {
        Self::with_size_and_policy(0, GrowthPolicy::default())
    }

    /// Creates a vector of `size` default-valued elements.
    pub fn with_size(size: usize) -> Self {
        Self::with_size_and_policy(size, GrowthPolicy::default())
    }

    /// Creates an empty vector that grows according to `policy`.
    pub fn with_policy(policy: GrowthPolicy) -> Self {
        Self::with_size_and_policy(0, policy)
    }

    /// Creates a vector of `size` default-valued elements that grows according
    /// to `policy`.
    ///
    /// The capacity is [`DEFAULT_CAPACITY`], or twice `size` when `size`
    /// exceeds it.
    pub fn with_size_and_policy(size: usize, policy: GrowthPolicy) -> Self {
        let capacity = if size > DEFAULT_CAPACITY {
            size.saturating_mul(2)
        } else {
            DEFAULT_CAPACITY
        };
        Self {
            buffer: allocate(capacity),
            size,
            capacity,
            generation: 0,
            policy,
        }
    }

    /// Creates an empty vector and appends each value in order.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_values_with_policy(values, GrowthPolicy::default())
    }

    /// Like [`Vector::from_values`], growing according to `policy`.
    pub fn from_values_with_policy<I>(values: I, policy: GrowthPolicy) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut vector = Self::with_policy(policy);
        vector.extend(values);
        vector
    }

    /// Appends `value`, growing the buffer first if it is full.
    ///
    /// This operation is amortized constant-time under the default policy.
    ///
    /// # Panics
    ///
    /// Panics if a cursor guard borrows the buffer and no reallocation happens,
    /// or if a mutable cursor guard is alive when the buffer must grow.
    pub fn append(&mut self, value: T) {
        if self.size == self.capacity {
            self.grow();
        }
        self.buffer.borrow_mut()[self.size] = value;
        self.size += 1;
    }

    /// Inserts `value` at `index`, shifting later elements one slot right.
    ///
    /// `index == size` is allowed and behaves like [`Vector::append`].
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.size {
            return Err(self.out_of_bounds(index));
        }
        if self.size == self.capacity {
            self.try_grow()?;
        }
        let mut slots = self.slots_mut()?;
        slots[self.size] = value;
        slots[index..=self.size].rotate_right(1);
        drop(slots);
        self.size += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting later elements one
    /// slot left. Capacity is left unchanged.
    ///
    /// The vacated slot at the old end keeps the removed value until it is
    /// overwritten, so a cursor past [`Vector::end`] may still observe it.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;
        let last = self.size - 1;
        let mut slots = self.slots_mut()?;
        let removed = slots[index].clone();
        slots[index..self.size].rotate_left(1);
        drop(slots);
        self.size = last;
        Ok(removed)
    }

    /// Replaces the buffer with one sized by the growth policy.
    ///
    /// Called implicitly when an append or insert finds the buffer full. The
    /// policy receives the current size. If its answer does not exceed the
    /// size, the new buffer gets exactly one free slot and the next append will
    /// grow again.
    ///
    /// # Panics
    ///
    /// Panics if a mutable cursor guard is alive on the current buffer.
    pub fn grow(&mut self) {
        let new_capacity = self.next_capacity();
        let fresh = allocate::<T>(new_capacity);
        fresh.borrow_mut()[..self.size].clone_from_slice(&self.buffer.borrow()[..self.size]);
        self.install(fresh, new_capacity);
    }

    fn try_grow(&mut self) -> Result<()> {
        let new_capacity = self.next_capacity();
        let fresh = allocate::<T>(new_capacity);
        fresh.borrow_mut()[..self.size].clone_from_slice(&self.slots()?[..self.size]);
        self.install(fresh, new_capacity);
        Ok(())
    }

    fn next_capacity(&self) -> usize {
        let requested = self.policy.apply(self.size);
        if requested > self.size {
            return requested;
        }
        debug!(
            requested,
            size = self.size,
            "growth policy did not exceed size, allocating a single free slot"
        );
        self.size + 1
    }

    fn install(&mut self, fresh: SharedBuffer<T>, new_capacity: usize) {
        trace!(
            old_capacity = self.capacity,
            new_capacity,
            size = self.size,
            generation = self.generation + 1,
            "replaced vector buffer"
        );
        self.buffer = fresh;
        self.capacity = new_capacity;
        self.generation += 1;
    }
}

impl<T> Vector<T> {
    /// Returns the number of logically present elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the vector holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns how many times the buffer has been replaced.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the growth policy in use.
    pub fn policy(&self) -> &GrowthPolicy {
        &self.policy
    }

    /// Returns the element at `index`.
    pub fn get(&self, index: usize) -> Result<Ref<'_, T>> {
        self.check_index(index)?;
        Ok(Ref::map(self.slots()?, |slots| &slots[index]))
    }

    /// Returns a mutable handle to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<RefMut<'_, T>> {
        self.check_index(index)?;
        Ok(RefMut::map(self.slots_mut()?, |slots| &mut slots[index]))
    }

    /// Overwrites the element at `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Forgets all elements. Capacity and buffer contents are kept; stale
    /// values stay in place until overwritten.
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Returns a cursor at position 0 over the current buffer.
    pub fn begin(&self) -> Cursor<T> {
        Cursor::new(0, Rc::clone(&self.buffer), self.generation)
    }

    /// Returns a cursor one past the last element. The position is the size at
    /// the time of the call and does not track later changes.
    pub fn end(&self) -> Cursor<T> {
        Cursor::new(self.size, Rc::clone(&self.buffer), self.generation)
    }

    /// Checks that `cursor` was created over this vector's current buffer and
    /// points at a present element.
    pub fn check_cursor(&self, cursor: &Cursor<T>) -> Result<()> {
        let buffer = cursor.buffer().ok_or(VectorError::NullCursor)?;
        if cursor.generation() != self.generation || !Rc::ptr_eq(buffer, &self.buffer) {
            return Err(VectorError::StaleCursor {
                cursor: cursor.generation(),
                current: self.generation,
            });
        }
        self.check_index(cursor.position())
    }

    /// Dereferences `cursor`, failing if it is null, stale or out of bounds.
    pub fn cursor_get(&self, cursor: &Cursor<T>) -> Result<Ref<'_, T>> {
        self.check_cursor(cursor)?;
        self.get(cursor.position())
    }

    /// Mutable counterpart of [`Vector::cursor_get`].
    pub fn cursor_get_mut(&mut self, cursor: &Cursor<T>) -> Result<RefMut<'_, T>> {
        self.check_cursor(cursor)?;
        self.get_mut(cursor.position())
    }

    /// Returns an iterator over clones of the present elements.
    ///
    /// Like [`Vector::begin`], the iterator snapshots the current buffer and
    /// size.
    ///
    /// # Panics
    ///
    /// Advancing the iterator panics if a mutable cursor guard is alive on the
    /// snapshotted buffer.
    pub fn iter(&self) -> Iter<T> {
        Iter { cursor: self.begin(), end: self.size }
    }

    fn slots(&self) -> Result<Ref<'_, Box<[T]>>> {
        self.buffer.try_borrow().map_err(|_| VectorError::BufferBorrowed)
    }

    fn slots_mut(&self) -> Result<RefMut<'_, Box<[T]>>> {
        self.buffer.try_borrow_mut().map_err(|_| VectorError::BufferBorrowed)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.size {
            Ok(())
        } else {
            Err(self.out_of_bounds(index))
        }
    }

    fn out_of_bounds(&self, index: usize) -> VectorError {
        VectorError::OutOfBounds { index, size: self.size }
    }
}

impl<T: Clone> Vector<T> {
    /// Copies the present elements into a `Vec`.
    ///
    /// # Panics
    ///
    /// Panics if a mutable cursor guard is alive on the buffer.
    pub fn to_vec(&self) -> Vec<T> {
        self.buffer.borrow()[..self.size].to_vec()
    }
}

/// Iterator returned by [`Vector::iter`].
pub struct Iter<T> {
    cursor: Cursor<T>,
    end: usize,
}

impl<T: Clone> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.cursor.position() >= self.end {
            return None;
        }
        let buffer = self.cursor.buffer()?;
        let value = buffer.borrow().get(self.cursor.position())?.clone();
        self.cursor.pre_increment();
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end.saturating_sub(self.cursor.position());
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for Iter<T> {}

impl<T: Clone> FusedIterator for Iter<T> {}

impl<T: Clone> IntoIterator for &Vector<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        self.iter()
    }
}

impl<T: Default + Clone> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy: the clone gets its own buffer and the same growth policy.
///
/// Panics if a mutable cursor guard is alive on the buffer.
impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let slots: Box<[T]> = self.buffer.borrow().clone();
        Self {
            buffer: Rc::new(RefCell::new(slots)),
            size: self.size,
            capacity: self.capacity,
            generation: self.generation,
            policy: self.policy.clone(),
        }
    }
}

impl<T: Default + Clone> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.append(value);
        }
    }
}

impl<T: Default + Clone> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self::from_values(values)
    }
}

impl<T: Default + Clone, const N: usize> From<[T; N]> for Vector<T> {
    fn from(values: [T; N]) -> Self {
        Self::from_values(values)
    }
}

impl<T: Default + Clone> From<Vec<T>> for Vector<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_values(values)
    }
}

/// Compares the present elements only.
///
/// # Panics
///
/// Panics if a mutable cursor guard is alive on either buffer.
impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.size != other.size {
            return false;
        }
        let (lhs, rhs) = (self.buffer.borrow(), other.buffer.borrow());
        lhs[..self.size] == rhs[..other.size]
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.buffer.try_borrow() {
            Ok(slots) => f.debug_list().entries(slots[..self.size].iter()).finish(),
            Err(_) => f.write_str("[<borrowed>]"),
        }
    }
}
