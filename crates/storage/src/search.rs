//! Equality-based search and deduplication
//!
//! All operations here compare elements with `PartialEq`. For types whose
//! equality is not an equivalence relation (floats with NaN, for example) the
//! results follow whatever `==` reports.

use crate::array::DynamicArray;
use dynarray_concurrency::LockMode;
use std::collections::VecDeque;
use tracing::trace;

impl<T: PartialEq, M: LockMode> DynamicArray<T, M> {
    /// Index of the first element equal to `value`, or `None`
    pub fn search(&self, value: &T) -> Option<usize> {
        self.guard.read().iter().position(|v| v == value)
    }

    /// Check if any element equals `value`
    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_some()
    }

    /// Remove every element equal to an earlier one
    ///
    /// First occurrences keep their relative order, so `[1, 1, 2, 1, 3]`
    /// becomes `[1, 2, 3]` and a run of any length collapses to one element.
    /// Quadratic in the number of elements, since only equality is required.
    pub fn unique(&self) -> &Self {
        let mut elements = self.guard.write();
        let before = elements.len();
        let mut kept = VecDeque::with_capacity(before);
        for value in elements.drain(..) {
            if !kept.contains(&value) {
                kept.push_back(value);
            }
        }
        *elements = kept;

        let removed = before - elements.len();
        if removed > 0 {
            trace!(removed, remaining = elements.len(), "removed duplicate elements");
        }
        self
    }
}
