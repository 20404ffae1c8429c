//! Whole-array transformations
//!
//! Reordering operations (`sort_by`, `reverse`) work in place under the
//! exclusive permission. Extraction operations (`chunk`, `sub_slice`) copy
//! out under the shared permission and never alias the live storage.

use crate::array::DynamicArray;
use dynarray_concurrency::LockMode;
use std::cmp::Ordering;
use tracing::debug;

impl<T, M: LockMode> DynamicArray<T, M> {
    /// Reorder elements with `compare`
    ///
    /// Not stable: elements that compare equal may change relative order.
    /// If `compare` panics the array holds some permutation of its elements
    /// and the lock is released.
    pub fn sort_by<F>(&self, compare: F) -> &Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.guard.write().make_contiguous().sort_unstable_by(compare);
        self
    }

    /// Sort elements in ascending order
    pub fn sort(&self) -> &Self
    where
        T: Ord,
    {
        self.sort_by(T::cmp)
    }

    /// Reverse element order in place
    pub fn reverse(&self) -> &Self {
        self.guard.write().make_contiguous().reverse();
        self
    }

    /// Write `value` to `count` positions starting at `start`
    ///
    /// Positions inside the array are overwritten; positions past the end are
    /// appended. The array never shrinks. A `start` past the end leaves no
    /// gap: all `count` copies are appended.
    pub fn fill(&self, start: usize, count: usize, value: T) -> &Self
    where
        T: Clone,
    {
        let mut elements = self.guard.write();
        let end = start.saturating_add(count);
        if end > elements.len() {
            let len = elements.len();
            elements.reserve(end - start.max(len));
        }
        for i in start..end {
            if i < elements.len() {
                elements[i] = value.clone();
            } else {
                elements.push_back(value.clone());
            }
        }
        self
    }

    /// Split into chunks of `size` elements
    ///
    /// The last chunk holds the remainder and may be shorter. An empty array
    /// yields no chunks.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[track_caller]
    pub fn chunk(&self, size: usize) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        assert!(size >= 1, "chunk size cannot be less than 1");
        let elements = self.guard.read();
        let count = match elements.len() {
            0 => 0,
            len => (len - 1) / size + 1,
        };
        let mut chunks = Vec::with_capacity(count);
        let mut iter = elements.iter().cloned();
        loop {
            let chunk: Vec<T> = iter.by_ref().take(size).collect();
            if chunk.is_empty() {
                break;
            }
            chunks.push(chunk);
        }
        chunks
    }

    /// Grow to `|size|` elements with copies of `value`
    ///
    /// A positive `size` pads on the right, a negative one on the left.
    /// Nothing happens when `|size|` does not exceed the current length.
    pub fn pad(&self, size: isize, value: T) -> &Self
    where
        T: Clone,
    {
        let mut elements = self.guard.write();
        let target = size.unsigned_abs();
        if size == 0 || target <= elements.len() {
            return self;
        }
        let missing = target - elements.len();
        if size > 0 {
            elements.extend(std::iter::repeat(value).take(missing));
        } else {
            elements.reserve(missing);
            for _ in 0..missing {
                elements.push_front(value.clone());
            }
        }
        self
    }

    /// Copy of up to `size` elements starting at `offset`
    ///
    /// Returns `None` if `offset > len()`. A range running past the end is
    /// clamped to the tail.
    pub fn sub_slice(&self, offset: usize, size: usize) -> Option<Vec<T>>
    where
        T: Clone,
    {
        let elements = self.guard.read();
        if offset > elements.len() {
            return None;
        }
        let size = size.min(elements.len() - offset);
        Some(elements.range(offset..offset + size).cloned().collect())
    }

    /// String forms of all elements separated by `glue`
    pub fn join(&self, glue: &str) -> String
    where
        T: std::fmt::Display,
    {
        self.guard
            .read()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(glue)
    }

    /// Append all elements of `other`
    ///
    /// Merging an array into itself takes the exclusive permission once and
    /// doubles the contents in order. For a distinct array, `other` is copied
    /// under its shared permission, released, and the copy appended under
    /// this array's exclusive permission; the two locks are never held
    /// together, so merges in opposite directions cannot deadlock.
    pub fn merge<N: LockMode>(&self, other: &DynamicArray<T, N>) -> &Self
    where
        T: Clone,
    {
        if self.addr() == other.addr() {
            let mut elements = self.guard.write();
            let len = elements.len();
            debug!(mode = %M::MODE, len, "merging array into itself");
            elements.reserve(len);
            for i in 0..len {
                let value = elements[i].clone();
                elements.push_back(value);
            }
            return self;
        }

        let incoming: Vec<T> = other.guard.read().iter().cloned().collect();
        self.guard.write().extend(incoming);
        self
    }
}
