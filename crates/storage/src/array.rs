//! Dynamic array with switchable locking
//!
//! [`DynamicArray`] owns an ordered sequence of elements behind a
//! [`Guard`]. Every public operation goes through the guard: reads take the
//! shared permission, mutations take the exclusive one, and the permission is
//! released before the operation returns.
//!
//! # Modes
//!
//! | Mode | Type | Constructors | Shareable across threads |
//! |------|------|--------------|--------------------------|
//! | Safe | `DynamicArray<T>` | `new`, `from_vec` | Yes |
//! | Unsafe | `DynamicArray<T, Unsafe>` | `new_unsafe`, `from_vec_unsafe` | No (`!Sync`) |
//!
//! # Caller-validated indices
//!
//! Position-based operations do not clamp or ignore bad indices. An index
//! outside the documented range, or a pop on an empty array, is a bug in the
//! caller and panics. The `try_*` variants report the same conditions as
//! [`ArrayError`] instead.

use dynarray_concurrency::{Guard, LockMode, Safe, SharedGuard, Unsafe};
use dynarray_core::{ArrayConfig, ArrayError, ConcurrencyMode};
use std::collections::VecDeque;
use tracing::{debug, trace};

/// Ordered, growable container with a locking discipline fixed by `M`
///
/// # Example
///
/// ```
/// use dynarray_storage::DynamicArray;
///
/// let arr = DynamicArray::from_vec(vec![1, 2, 3]);
/// arr.push_right([4, 5]).push_left([0]);
///
/// assert_eq!(arr.slice(), vec![0, 1, 2, 3, 4, 5]);
/// assert_eq!(arr.pop_right(), 5);
/// assert_eq!(arr.join(","), "0,1,2,3,4");
/// ```
pub struct DynamicArray<T, M: LockMode = Safe> {
    /// Backing sequence; its length is the array's length
    pub(crate) guard: Guard<M, VecDeque<T>>,
    /// Size and capacity to return to on `clear`
    config: ArrayConfig,
    /// Builds the backing sequence `clear` installs
    reset: fn(&ArrayConfig) -> VecDeque<T>,
}

impl<T: Default> DynamicArray<T, Safe> {
    /// Create a safe-mode array holding `size` default values
    ///
    /// `capacity` is an allocation hint; pass `0` for none.
    pub fn new(size: usize, capacity: usize) -> Self {
        Self::with_mode(size, capacity)
    }
}

impl<T> DynamicArray<T, Safe> {
    /// Create a safe-mode array that takes ownership of `elements`
    pub fn from_vec(elements: Vec<T>) -> Self {
        Self::from_vec_with_mode(elements)
    }
}

impl<T: Default> DynamicArray<T, Unsafe> {
    /// Create an unsafe-mode array holding `size` default values
    pub fn new_unsafe(size: usize, capacity: usize) -> Self {
        Self::with_mode(size, capacity)
    }
}

impl<T> DynamicArray<T, Unsafe> {
    /// Create an unsafe-mode array that takes ownership of `elements`
    pub fn from_vec_unsafe(elements: Vec<T>) -> Self {
        Self::from_vec_with_mode(elements)
    }
}

impl<T, M: LockMode> DynamicArray<T, M> {
    /// Create an array in mode `M` holding `size` default values
    pub fn with_mode(size: usize, capacity: usize) -> Self
    where
        T: Default,
    {
        Self::with_config(ArrayConfig::new(size, capacity))
    }

    /// Create an array in mode `M` from a construction config
    pub fn with_config(config: ArrayConfig) -> Self
    where
        T: Default,
    {
        trace!(
            mode = %M::MODE,
            size = config.size,
            capacity = ?config.capacity,
            "creating dynamic array"
        );
        Self {
            guard: Guard::new(allocate(&config)),
            config,
            reset: allocate::<T>,
        }
    }

    /// Create an array in mode `M` that takes ownership of `elements`
    ///
    /// No copy is made. The array's construction size is zero, so `clear`
    /// leaves it empty.
    pub fn from_vec_with_mode(elements: Vec<T>) -> Self {
        trace!(mode = %M::MODE, len = elements.len(), "creating dynamic array from vec");
        Self {
            guard: Guard::new(VecDeque::from(elements)),
            config: ArrayConfig::default(),
            reset: reserve::<T>,
        }
    }

    /// Construction parameters this array resets to on `clear`
    pub fn config(&self) -> ArrayConfig {
        self.config
    }

    /// Check if this array performs real locking
    pub fn is_safe_mode(&self) -> bool {
        self.guard.is_safe_mode()
    }

    /// Locking discipline of this array
    pub fn mode(&self) -> ConcurrencyMode {
        self.guard.mode()
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.guard.read().len()
    }

    /// Check if the array has no elements
    pub fn is_empty(&self) -> bool {
        self.guard.read().is_empty()
    }

    /// Element at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[track_caller]
    pub fn get(&self, index: usize) -> T
    where
        T: Clone,
    {
        let elements = self.guard.read();
        match elements.get(index) {
            Some(value) => value.clone(),
            None => out_of_bounds(index, elements.len()),
        }
    }

    /// Overwrite the element at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[track_caller]
    pub fn set(&self, index: usize, value: T) -> &Self {
        let mut elements = self.guard.write();
        let len = elements.len();
        match elements.get_mut(index) {
            Some(slot) => *slot = value,
            None => out_of_bounds(index, len),
        }
        self
    }

    /// Replace the whole backing sequence
    pub fn set_array(&self, elements: Vec<T>) -> &Self {
        *self.guard.write() = VecDeque::from(elements);
        self
    }

    /// Independent copy of all elements
    ///
    /// The copy is taken under the shared permission; later mutations of the
    /// array do not affect it.
    pub fn slice(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.guard.read().iter().cloned().collect()
    }

    /// Zero-copy view of the live storage
    ///
    /// The view holds the shared permission until it is dropped. In safe mode
    /// that blocks writers; in unsafe mode a mutation attempted while the view
    /// is alive panics.
    pub fn view(&self) -> SharedGuard<'_, M, VecDeque<T>> {
        self.guard.read()
    }

    /// Reset to the construction size and capacity
    ///
    /// An already empty array is left untouched. Arrays built from a vec
    /// have a construction size of zero and come back empty, so no element
    /// bound is needed.
    pub fn clear(&self) -> &Self {
        let mut elements = self.guard.write();
        if !elements.is_empty() {
            debug!(
                mode = %M::MODE,
                dropped = elements.len(),
                size = self.config.size,
                "clearing dynamic array"
            );
            *elements = (self.reset)(&self.config);
        }
        self
    }

    /// Run `f` with exclusive access to the backing sequence
    ///
    /// The permission is held for the whole call and released afterwards,
    /// including when `f` panics. Calling other methods of this array from
    /// inside `f` deadlocks in safe mode and panics in unsafe mode.
    pub fn lock_func<R>(&self, f: impl FnOnce(&mut VecDeque<T>) -> R) -> R {
        let mut elements = self.guard.write();
        f(&mut elements)
    }

    /// Run `f` with shared access to the backing sequence
    ///
    /// Do not call other methods of this array from inside `f`. In safe mode
    /// the nested call takes the shared permission again, and parking_lot
    /// read locks are not recursive: a writer queued in between deadlocks
    /// both. Unsafe mode allows nested reads and panics on a nested mutation.
    pub fn rlock_func<R>(&self, f: impl FnOnce(&VecDeque<T>) -> R) -> R {
        let elements = self.guard.read();
        f(&elements)
    }

    /// Consume the array and return its elements
    pub fn into_vec(self) -> Vec<T> {
        Vec::from(self.guard.into_inner())
    }

    /// Address used for identity comparison between arrays of any mode
    pub(crate) fn addr(&self) -> *const () {
        self as *const Self as *const ()
    }
}

/// Fresh backing storage for a construction config
fn allocate<T: Default>(config: &ArrayConfig) -> VecDeque<T> {
    let mut elements = VecDeque::with_capacity(config.allocation());
    elements.resize_with(config.size, T::default);
    elements
}

/// Empty backing storage with the configured capacity
fn reserve<T>(config: &ArrayConfig) -> VecDeque<T> {
    VecDeque::with_capacity(config.allocation())
}

/// Remove the element at `index`
///
/// Both ends are constant-time pops; an interior index shifts the shorter
/// side. Returns `None` if `index` is out of range.
pub(crate) fn take_at<T>(elements: &mut VecDeque<T>, index: usize) -> Option<T> {
    if index == 0 {
        elements.pop_front()
    } else if index + 1 == elements.len() {
        elements.pop_back()
    } else {
        elements.remove(index)
    }
}

#[cold]
#[track_caller]
pub(crate) fn out_of_bounds(index: usize, len: usize) -> ! {
    panic!("{}", ArrayError::IndexOutOfBounds { index, len })
}

#[cold]
#[track_caller]
pub(crate) fn empty_array(op: &str) -> ! {
    panic!("{} called on an empty array", op)
}

impl<T, M: LockMode> Default for DynamicArray<T, M> {
    fn default() -> Self {
        Self::from_vec_with_mode(Vec::new())
    }
}

impl<T: Clone, M: LockMode> Clone for DynamicArray<T, M> {
    fn clone(&self) -> Self {
        Self {
            guard: Guard::new(self.guard.read().clone()),
            config: self.config,
            reset: self.reset,
        }
    }
}

impl<T: std::fmt::Debug, M: LockMode> std::fmt::Debug for DynamicArray<T, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamicArray")
            .field("mode", &M::MODE)
            .field("elements", &*self.guard.read())
            .finish()
    }
}

impl<T, M: LockMode> From<Vec<T>> for DynamicArray<T, M> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec_with_mode(elements)
    }
}

impl<T, M: LockMode> FromIterator<T> for DynamicArray<T, M> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec_with_mode(iter.into_iter().collect())
    }
}

impl<T, M: LockMode> Extend<T> for DynamicArray<T, M> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.guard.get_mut().extend(iter);
    }
}

impl<T, M: LockMode> IntoIterator for DynamicArray<T, M> {
    type Item = T;
    type IntoIter = std::collections::vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.guard.into_inner().into_iter()
    }
}
