//! Storage core for dynarray
//!
//! This crate implements the dynamic array itself:
//! - DynamicArray: ordered sequence behind a mode-switchable guard
//! - Positional mutation (insert, remove, push/pop at both ends)
//! - Search and deduplication
//! - Whole-array transformations (sort, fill, chunk, pad, merge, ...)
//! - Random removal, sampling and shuffling
//! - Checked `try_*` variants of the position-based operations

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod array;
mod checked;
mod positional;
mod random;
mod search;
mod transform;

pub use array::DynamicArray;

// Re-export the guard types that appear in the array's signatures
pub use dynarray_concurrency::{LockMode, Safe, SharedGuard, Unsafe};
