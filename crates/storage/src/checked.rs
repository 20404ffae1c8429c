//! Checked variants of the position-based operations
//!
//! Same semantics as their unchecked counterparts, but a bad index, an empty
//! array or a zero chunk size is reported as an [`ArrayError`] instead of a
//! panic. The check and the operation happen under one permission.

use crate::array::{take_at, DynamicArray};
use dynarray_concurrency::LockMode;
use dynarray_core::{random, ArrayError, Result};

impl<T, M: LockMode> DynamicArray<T, M> {
    /// Element at `index`, or `IndexOutOfBounds`
    pub fn try_get(&self, index: usize) -> Result<T>
    where
        T: Clone,
    {
        let elements = self.guard.read();
        elements
            .get(index)
            .cloned()
            .ok_or(ArrayError::IndexOutOfBounds {
                index,
                len: elements.len(),
            })
    }

    /// Overwrite the element at `index`, or `IndexOutOfBounds`
    pub fn try_set(&self, index: usize, value: T) -> Result<&Self> {
        let mut elements = self.guard.write();
        let len = elements.len();
        let slot = elements
            .get_mut(index)
            .ok_or(ArrayError::IndexOutOfBounds { index, len })?;
        *slot = value;
        Ok(self)
    }

    /// Checked [`insert_before`](Self::insert_before); `index` may equal `len()`
    pub fn try_insert_before(&self, index: usize, value: T) -> Result<&Self> {
        let mut elements = self.guard.write();
        let len = elements.len();
        if index > len {
            return Err(ArrayError::IndexOutOfBounds { index, len });
        }
        elements.insert(index, value);
        Ok(self)
    }

    /// Checked [`insert_after`](Self::insert_after)
    pub fn try_insert_after(&self, index: usize, value: T) -> Result<&Self> {
        let mut elements = self.guard.write();
        let len = elements.len();
        if index >= len {
            return Err(ArrayError::IndexOutOfBounds { index, len });
        }
        elements.insert(index + 1, value);
        Ok(self)
    }

    /// Checked [`remove`](Self::remove)
    pub fn try_remove(&self, index: usize) -> Result<T> {
        let mut elements = self.guard.write();
        let len = elements.len();
        take_at(&mut elements, index).ok_or(ArrayError::IndexOutOfBounds { index, len })
    }

    /// Checked [`pop_left`](Self::pop_left)
    pub fn try_pop_left(&self) -> Result<T> {
        self.guard.write().pop_front().ok_or(ArrayError::Empty)
    }

    /// Checked [`pop_right`](Self::pop_right)
    pub fn try_pop_right(&self) -> Result<T> {
        self.guard.write().pop_back().ok_or(ArrayError::Empty)
    }

    /// Checked [`pop_rand`](Self::pop_rand)
    pub fn try_pop_rand(&self) -> Result<T> {
        let mut elements = self.guard.write();
        let len = elements.len();
        if len == 0 {
            return Err(ArrayError::Empty);
        }
        let index = random::intn(len);
        take_at(&mut elements, index).ok_or(ArrayError::IndexOutOfBounds { index, len })
    }

    /// Checked [`chunk`](Self::chunk)
    pub fn try_chunk(&self, size: usize) -> Result<Vec<Vec<T>>>
    where
        T: Clone,
    {
        if size == 0 {
            return Err(ArrayError::InvalidChunkSize(size));
        }
        Ok(self.chunk(size))
    }
}
