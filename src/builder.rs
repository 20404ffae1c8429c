//! Builder for array construction.
//!
//! This module provides [`ArrayBuilder`], a typed builder that collects the
//! construction parameters of a [`DynamicArray`] and fixes its locking mode.

use dynarray_core::ArrayConfig;
use dynarray_storage::{DynamicArray, LockMode, Safe, Unsafe};
use std::marker::PhantomData;

/// Builder for array configuration.
///
/// The locking mode is part of the builder's type: [`ArrayBuilder::new`]
/// starts in safe mode and [`unsafe_mode`](ArrayBuilder::unsafe_mode)
/// switches to unsafe mode. Whatever mode the builder ends in is the mode of
/// every array it builds.
///
/// # Example
///
/// ```
/// use dynarray::ArrayBuilder;
///
/// // Shared between threads: safe mode (default)
/// let shared = ArrayBuilder::new().size(4).capacity(64).build::<u32>();
/// assert_eq!(shared.len(), 4);
/// assert!(shared.is_safe_mode());
///
/// // Single-threaded hot path: no locking
/// let local = ArrayBuilder::new().capacity(1024).unsafe_mode().build::<u32>();
/// assert!(local.is_empty());
/// assert!(!local.is_safe_mode());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ArrayBuilder<M: LockMode = Safe> {
    config: ArrayConfig,
    mode: PhantomData<M>,
}

impl ArrayBuilder<Safe> {
    /// Create a new builder with default settings.
    ///
    /// Safe mode, size 0, no capacity hint.
    pub fn new() -> Self {
        Self {
            config: ArrayConfig::default(),
            mode: PhantomData,
        }
    }
}

impl<M: LockMode> ArrayBuilder<M> {
    /// Set the number of default elements the array starts with.
    ///
    /// This is also the size `clear` resets the array to.
    pub fn size(mut self, size: usize) -> Self {
        self.config.size = size;
        self
    }

    /// Set the capacity hint for the backing storage.
    ///
    /// `0` removes the hint.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config = ArrayConfig::new(self.config.size, capacity);
        self
    }

    /// Use unsafe mode (no cross-thread locking).
    ///
    /// The resulting array is not `Sync` and can only be used from one thread
    /// at a time.
    pub fn unsafe_mode(self) -> ArrayBuilder<Unsafe> {
        ArrayBuilder {
            config: self.config,
            mode: PhantomData,
        }
    }

    /// Use safe mode (reader/writer locking, the default).
    pub fn safe_mode(self) -> ArrayBuilder<Safe> {
        ArrayBuilder {
            config: self.config,
            mode: PhantomData,
        }
    }

    /// Configuration collected so far.
    pub fn config(&self) -> ArrayConfig {
        self.config
    }

    /// Build the array.
    pub fn build<T: Default>(self) -> DynamicArray<T, M> {
        DynamicArray::with_config(self.config)
    }
}

impl Default for ArrayBuilder<Safe> {
    fn default() -> Self {
        Self::new()
    }
}
