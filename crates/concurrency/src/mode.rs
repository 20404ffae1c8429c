//! Lock strategies selectable at construction
//!
//! A [`LockMode`] names the raw reader/writer lock a [`Guard`](crate::Guard)
//! is built on. There are exactly two: [`Safe`] (parking_lot) and [`Unsafe`]
//! ([`LocalRawRwLock`]). The choice is a type parameter, so an array can never
//! switch modes or be accessed through both.

use crate::local::LocalRawRwLock;
use dynarray_core::ConcurrencyMode;
use parking_lot::lock_api::RawRwLock;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Safe {}
    impl Sealed for super::Unsafe {}
}

/// Locking strategy of a guard
///
/// Sealed: the two implementations below are the only ones.
pub trait LockMode: sealed::Sealed + 'static {
    /// Raw lock backing the guard
    type Raw: RawRwLock;

    /// Mode reported by `is_safe_mode` / `mode`
    const MODE: ConcurrencyMode;
}

/// Real reader/writer locking; arrays in this mode are `Sync`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Safe;

/// No cross-thread locking; arrays in this mode are not `Sync`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unsafe;

impl LockMode for Safe {
    type Raw = parking_lot::RawRwLock;
    const MODE: ConcurrencyMode = ConcurrencyMode::Safe;
}

impl LockMode for Unsafe {
    type Raw = LocalRawRwLock;
    const MODE: ConcurrencyMode = ConcurrencyMode::Unsafe;
}
