//! Concurrency mode reported by arrays and guards

/// Locking discipline of an array, fixed at construction
///
/// - `Safe`: reader/writer locking, the array can be shared across threads
/// - `Unsafe`: no cross-thread locking, single-threaded use only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConcurrencyMode {
    /// Real reader/writer lock
    #[default]
    Safe,
    /// Pass-through lock for single-threaded hot paths
    Unsafe,
}

impl ConcurrencyMode {
    /// Check if this mode performs real locking
    ///
    /// # Examples
    ///
    /// ```
    /// use dynarray_core::ConcurrencyMode;
    ///
    /// assert!(ConcurrencyMode::Safe.is_safe());
    /// assert!(!ConcurrencyMode::Unsafe.is_safe());
    /// assert_eq!(ConcurrencyMode::default(), ConcurrencyMode::Safe);
    /// ```
    pub const fn is_safe(self) -> bool {
        matches!(self, ConcurrencyMode::Safe)
    }

    /// Mode name as used in logs
    pub const fn as_str(self) -> &'static str {
        match self {
            ConcurrencyMode::Safe => "safe",
            ConcurrencyMode::Unsafe => "unsafe",
        }
    }
}

impl std::fmt::Display for ConcurrencyMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
