//! Construction parameters for dynamic arrays

/// Size and capacity requested when an array is created
///
/// `size` is the number of default elements the array starts with, and is the
/// size it returns to on `clear`. `capacity` is a pure allocation hint: it is
/// never observable through the array's contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArrayConfig {
    /// Logical size at construction and after `clear`
    pub size: usize,
    /// Optional capacity hint for the backing storage
    pub capacity: Option<usize>,
}

impl ArrayConfig {
    /// Create a config with the given size and capacity hint
    ///
    /// A capacity of zero means "no hint", matching how callers pass `0` when
    /// they do not care.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynarray_core::ArrayConfig;
    ///
    /// let config = ArrayConfig::new(2, 0);
    /// assert_eq!(config.capacity, None);
    /// assert_eq!(ArrayConfig::new(2, 16).capacity, Some(16));
    /// ```
    pub fn new(size: usize, capacity: usize) -> Self {
        Self {
            size,
            capacity: (capacity > 0).then_some(capacity),
        }
    }

    /// Capacity to allocate for the backing storage
    ///
    /// Never less than `size`, so the initial elements always fit.
    pub fn allocation(&self) -> usize {
        self.capacity.map_or(self.size, |cap| cap.max(self.size))
    }
}
