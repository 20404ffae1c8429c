//! Random removal, sampling and shuffling
//!
//! Every random choice is drawn from [`dynarray_core::random`].

use crate::array::{empty_array, out_of_bounds, take_at, DynamicArray};
use dynarray_concurrency::LockMode;
use dynarray_core::random;

impl<T, M: LockMode> DynamicArray<T, M> {
    /// Remove and return a uniformly chosen element
    ///
    /// The index is drawn and the element removed under one exclusive
    /// permission, so no other operation can change the length in between.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    #[track_caller]
    pub fn pop_rand(&self) -> T {
        let mut elements = self.guard.write();
        let len = elements.len();
        if len == 0 {
            empty_array("pop_rand");
        }
        let index = random::intn(len);
        match take_at(&mut elements, index) {
            Some(value) => value,
            None => out_of_bounds(index, len),
        }
    }

    /// Copy of `count` distinct elements in random order
    ///
    /// Sampling is without replacement; `count` is clamped to `len()`.
    pub fn rand(&self, count: usize) -> Vec<T>
    where
        T: Clone,
    {
        let elements = self.guard.read();
        random::sample(elements.len(), count)
            .into_iter()
            .map(|i| elements[i].clone())
            .collect()
    }

    /// Randomly permute all elements in place
    pub fn shuffle(&self) -> &Self {
        random::shuffle(self.guard.write().make_contiguous());
        self
    }
}
