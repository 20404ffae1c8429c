//! Core types for dynarray
//!
//! This crate defines the pieces shared by every other crate in the
//! workspace:
//! - [`ArrayError`]: errors reported by the checked `try_*` operations
//! - [`ConcurrencyMode`]: the locking discipline an array was built with
//! - [`ArrayConfig`]: size and capacity requested at construction
//! - [`random`]: the random index source used for sampling and shuffling

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod mode;
pub mod random;

pub use config::ArrayConfig;
pub use error::{ArrayError, Result};
pub use mode::ConcurrencyMode;
