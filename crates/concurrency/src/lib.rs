//! Concurrency guard for dynarray
//!
//! This crate implements the switchable locking discipline with:
//! - LockMode: strategy chosen once, as a type parameter
//! - Safe: parking_lot reader/writer lock
//! - Unsafe: LocalRawRwLock, single-threaded and never blocking
//! - Guard: RAII shared/exclusive permissions over the protected value

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod guard;
pub mod local;
pub mod mode;

pub use guard::{ExclusiveGuard, Guard, SharedGuard};
pub use local::LocalRawRwLock;
pub use mode::{LockMode, Safe, Unsafe};
