//! Capacity growth policies.
//!
//! A [`GrowthPolicy`] maps the container's current size to the capacity of the
//! next buffer. It is consulted only when an append or insert finds the buffer
//! full, or when [`Vector::grow`](crate::Vector::grow) is called explicitly.
//!
//! The argument is the current *size*, which equals the capacity whenever growth
//! is triggered implicitly. Policies should treat it as a hint: a policy may
//! ignore it entirely and compute from state it captured itself.
//!
//! ```rust
//! use growvec::GrowthPolicy;
//!
//! assert_eq!(GrowthPolicy::doubling().apply(10), 20);
//! assert_eq!(GrowthPolicy::fixed(4).apply(10), 14);
//! assert_eq!(GrowthPolicy::factor(3, 2).apply(10), 15);
//! assert_eq!(GrowthPolicy::from_fn(|_| 64).apply(10), 64);
//! ```

use std::fmt;
use std::rc::Rc;

/// A cloneable `(size) -> new_capacity` strategy held by value in the container.
#[derive(Clone)]
pub struct GrowthPolicy {
    func: Rc<dyn Fn(usize) -> usize>,
    name: &'static str,
}

impl GrowthPolicy {
    /// The default policy: twice the value it is given.
    pub fn doubling() -> Self {
        Self::named("doubling", |current| current.saturating_mul(2))
    }

    /// Wraps an arbitrary closure.
    pub fn from_fn<F>(func: F) -> Self
    where
        F: Fn(usize) -> usize + 'static,
    {
        Self::named("custom", func)
    }

    /// Grows by a constant number of slots.
    pub fn fixed(step: usize) -> Self {
        Self::named("fixed", move |current| current.saturating_add(step))
    }

    /// Grows by the ratio `num / den`, rounding up.
    ///
    /// # Panics
    ///
    /// Panics if `den` is 0.
    pub fn factor(num: usize, den: usize) -> Self {
        assert!(den > 0, "growth factor denominator must be > 0");
        Self::named("factor", move |current| {
            current.saturating_mul(num).div_ceil(den)
        })
    }

    fn named<F>(name: &'static str, func: F) -> Self
    where
        F: Fn(usize) -> usize + 'static,
    {
        Self { func: Rc::new(func), name }
    }

    /// Evaluates the policy for the given size.
    #[inline]
    pub fn apply(&self, size: usize) -> usize {
        (self.func)(size)
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::doubling()
    }
}

impl fmt::Debug for GrowthPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("GrowthPolicy").field(&self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The default policy doubles.
    #[test]
    fn test_default_doubles() {
        let policy = GrowthPolicy::default();
        assert_eq!(policy.apply(0), 0);
        assert_eq!(policy.apply(10), 20);
        assert_eq!(policy.apply(usize::MAX), usize::MAX);
    }

    #[test]
    fn test_fixed_and_factor() {
        assert_eq!(GrowthPolicy::fixed(5).apply(10), 15);
        assert_eq!(GrowthPolicy::factor(3, 2).apply(7), 11);
        assert_eq!(GrowthPolicy::factor(1, 1).apply(7), 7);
    }

    /// Closures may ignore their argument and use captured state instead.
    #[test]
    fn test_closure_with_captured_state() {
        let step = 32;
        let policy = GrowthPolicy::from_fn(move |_| step);
        assert_eq!(policy.apply(0), 32);
        assert_eq!(policy.apply(1000), 32);
        assert_eq!(format!("{policy:?}"), "GrowthPolicy(\"custom\")");
    }

    #[test]
    #[should_panic(expected = "denominator")]
    fn test_factor_zero_denominator() {
        let _ = GrowthPolicy::factor(2, 0);
    }
}
