//! Mode-switchable reader/writer guard
//!
//! [`Guard`] owns the value it protects and hands out RAII permissions:
//! - [`Guard::read`]: shared permission, released when the returned guard drops
//! - [`Guard::write`]: exclusive permission, released when the returned guard drops
//!
//! Because release happens in `Drop`, a permission is given back on every exit
//! path, including a panic while it is held. parking_lot locks do not poison,
//! so a guard stays usable after such a panic.

use crate::mode::{LockMode, Safe};
use dynarray_core::ConcurrencyMode;
use parking_lot::lock_api::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::marker::PhantomData;

/// Shared permission on a guarded value
pub type SharedGuard<'a, M, T> = RwLockReadGuard<'a, <M as LockMode>::Raw, T>;

/// Exclusive permission on a guarded value
pub type ExclusiveGuard<'a, M, T> = RwLockWriteGuard<'a, <M as LockMode>::Raw, T>;

/// Reader/writer guard whose locking strategy is fixed by `M`
///
/// `Guard<Safe, T>` is `Send` when `T: Send` and `Sync` when
/// `T: Send + Sync`. `Guard<Unsafe, T>` is at most `Send`.
pub struct Guard<M: LockMode = Safe, T = ()> {
    lock: RwLock<M::Raw, T>,
    mode: PhantomData<M>,
}

impl<M: LockMode, T> Guard<M, T> {
    /// Create a guard around `value`
    pub fn new(value: T) -> Self {
        Self {
            lock: RwLock::new(value),
            mode: PhantomData,
        }
    }

    /// Acquire shared permission
    ///
    /// In safe mode this blocks while an exclusive permission is held.
    #[inline]
    pub fn read(&self) -> SharedGuard<'_, M, T> {
        self.lock.read()
    }

    /// Acquire exclusive permission
    ///
    /// In safe mode this blocks while any other permission is held.
    #[inline]
    pub fn write(&self) -> ExclusiveGuard<'_, M, T> {
        self.lock.write()
    }

    /// Try to acquire shared permission without blocking
    pub fn try_read(&self) -> Option<SharedGuard<'_, M, T>> {
        self.lock.try_read()
    }

    /// Try to acquire exclusive permission without blocking
    pub fn try_write(&self) -> Option<ExclusiveGuard<'_, M, T>> {
        self.lock.try_write()
    }

    /// Check if this guard performs real locking
    #[inline]
    pub fn is_safe_mode(&self) -> bool {
        M::MODE.is_safe()
    }

    /// Locking discipline of this guard
    #[inline]
    pub fn mode(&self) -> ConcurrencyMode {
        M::MODE
    }

    /// Check if any permission is currently held
    pub fn is_locked(&self) -> bool {
        self.lock.is_locked()
    }

    /// Mutable access through unique ownership; no locking needed
    pub fn get_mut(&mut self) -> &mut T {
        self.lock.get_mut()
    }

    /// Consume the guard and return the protected value
    pub fn into_inner(self) -> T {
        self.lock.into_inner()
    }
}

impl<M: LockMode, T: Default> Default for Guard<M, T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<M: LockMode, T> std::fmt::Debug for Guard<M, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard")
            .field("mode", &M::MODE)
            .field("locked", &self.is_locked())
            .finish()
    }
}
