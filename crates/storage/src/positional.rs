//! Positional mutation: insertion, removal and both-end push/pop

use crate::array::{empty_array, out_of_bounds, take_at, DynamicArray};
use dynarray_concurrency::LockMode;

impl<T, M: LockMode> DynamicArray<T, M> {
    /// Insert `value` so that it ends up at `index`
    ///
    /// `index == len()` appends.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    #[track_caller]
    pub fn insert_before(&self, index: usize, value: T) -> &Self {
        let mut elements = self.guard.write();
        let len = elements.len();
        if index > len {
            out_of_bounds(index, len);
        }
        elements.insert(index, value);
        self
    }

    /// Insert `value` right after the element at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[track_caller]
    pub fn insert_after(&self, index: usize, value: T) -> &Self {
        let mut elements = self.guard.write();
        let len = elements.len();
        if index >= len {
            out_of_bounds(index, len);
        }
        elements.insert(index + 1, value);
        self
    }

    /// Remove and return the element at `index`
    ///
    /// Removing the first or last element is constant time; any other index
    /// shifts the elements on its shorter side.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[track_caller]
    pub fn remove(&self, index: usize) -> T {
        let mut elements = self.guard.write();
        let len = elements.len();
        match take_at(&mut elements, index) {
            Some(value) => value,
            None => out_of_bounds(index, len),
        }
    }

    /// Prepend `values`, keeping their relative order
    ///
    /// `push_left([1, 2])` on `[3]` gives `[1, 2, 3]`.
    pub fn push_left(&self, values: impl IntoIterator<Item = T>) -> &Self {
        let mut elements = self.guard.write();
        let before = elements.len();
        elements.extend(values);
        let added = elements.len() - before;
        elements.rotate_right(added);
        self
    }

    /// Append `values`, keeping their relative order
    pub fn push_right(&self, values: impl IntoIterator<Item = T>) -> &Self {
        self.guard.write().extend(values);
        self
    }

    /// Alias of [`push_right`](Self::push_right)
    pub fn append(&self, values: impl IntoIterator<Item = T>) -> &Self {
        self.push_right(values)
    }

    /// Remove and return the first element
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    #[track_caller]
    pub fn pop_left(&self) -> T {
        match self.guard.write().pop_front() {
            Some(value) => value,
            None => empty_array("pop_left"),
        }
    }

    /// Remove and return the last element
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    #[track_caller]
    pub fn pop_right(&self) -> T {
        match self.guard.write().pop_back() {
            Some(value) => value,
            None => empty_array("pop_right"),
        }
    }
}
