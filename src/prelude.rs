//! Convenient imports for dynarray.
//!
//! This module re-exports the most commonly used types so you can get started
//! with a single import:
//!
//! ```
//! use dynarray::prelude::*;
//!
//! let arr: DynamicArray<i32, Unsafe> = ArrayBuilder::new().unsafe_mode().build();
//! arr.append([1, 2, 3]);
//! assert_eq!(arr.try_get(5), Err(Error::IndexOutOfBounds { index: 5, len: 3 }));
//! ```

// Main entry points
pub use crate::builder::ArrayBuilder;
pub use dynarray_storage::DynamicArray;

// Error handling
pub use crate::{Error, Result};

// Modes
pub use dynarray_concurrency::{LockMode, Safe, Unsafe};
pub use dynarray_core::ConcurrencyMode;
