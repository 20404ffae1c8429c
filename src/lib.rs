//! # dynarray
//!
//! Dynamic array with switchable reader/writer locking.
//!
//! A [`DynamicArray`] is an ordered, growable container that can be used in
//! one of two modes, fixed when it is created:
//!
//! - **Safe** (default): every operation goes through a reader/writer lock,
//!   so one array can be shared between threads (`Arc<DynamicArray<T>>`).
//! - **Unsafe**: no cross-thread locking, for single-threaded hot paths. The
//!   compiler rejects sharing such an array between threads.
//!
//! ## Quick Start
//!
//! ```
//! use dynarray::prelude::*;
//!
//! let arr = DynamicArray::from_vec(vec![3, 1, 2]);
//! arr.push_right([5, 4]);
//! arr.sort();
//! assert_eq!(arr.join(","), "1,2,3,4,5");
//!
//! // Composite update as one atomic unit
//! arr.lock_func(|elements| {
//!     let first = elements.pop_front();
//!     elements.extend(first);
//! });
//! assert_eq!(arr.slice(), vec![2, 3, 4, 5, 1]);
//! ```
//!
//! ## Caller-validated indices
//!
//! `get`, `set`, `remove`, `insert_before`, `insert_after` and the pops
//! panic on a bad index or an empty array. Use the `try_*` variants to get an
//! [`Error`] instead.
//!
//! ## Crates
//!
//! - `dynarray-core` - errors, mode, config, random index source
//! - `dynarray-concurrency` - lock strategies and the guard
//! - `dynarray-storage` - the array and its operations

#![warn(missing_docs)]

mod builder;

pub mod prelude;

// Re-export main entry points
pub use builder::ArrayBuilder;
pub use dynarray_storage::DynamicArray;

// Error handling
pub use dynarray_core::{ArrayError as Error, Result};

// Configuration and modes
pub use dynarray_concurrency::{Guard, LocalRawRwLock, LockMode, Safe, SharedGuard, Unsafe};
pub use dynarray_core::{ArrayConfig, ConcurrencyMode};
