//! Single-threaded raw reader/writer lock
//!
//! Backs unsafe mode. It performs no atomic operations and never blocks. The
//! state lives in a `Cell`, which makes the lock `!Sync`: the compiler rejects
//! any attempt to share an unsafe-mode array between threads.
//!
//! Shared and exclusive acquisitions are still tracked so that re-entrant
//! conflicting access (for example calling a mutating method from inside a
//! `rlock_func` closure) panics instead of handing out aliased references.
//! Where a real lock would deadlock, this one panics.

use parking_lot::lock_api::{GuardNoSend, RawRwLock};
use std::cell::Cell;

/// State value while the exclusive permission is held
const EXCLUSIVE: isize = -1;

/// Raw lock for single-threaded use
///
/// State: `0` free, `n > 0` held by `n` readers, `-1` held by one writer.
#[derive(Debug)]
pub struct LocalRawRwLock {
    state: Cell<isize>,
}

impl LocalRawRwLock {
    /// Number of outstanding shared acquisitions
    pub fn readers(&self) -> usize {
        self.state.get().max(0) as usize
    }

    /// Check if the exclusive permission is currently held
    pub fn is_held_exclusive(&self) -> bool {
        self.state.get() == EXCLUSIVE
    }

    #[cold]
    #[track_caller]
    fn conflict(&self, requested: &'static str) -> ! {
        let held = if self.is_held_exclusive() {
            "exclusive"
        } else {
            "shared"
        };
        tracing::error!(requested, held, "conflicting re-entrant access to unsafe-mode array");
        panic!(
            "unsafe-mode array: {} access requested while {} access is held",
            requested, held
        );
    }
}

unsafe impl RawRwLock for LocalRawRwLock {
    #[allow(clippy::declare_interior_mutable_const)]
    const INIT: Self = LocalRawRwLock {
        state: Cell::new(0),
    };

    type GuardMarker = GuardNoSend;

    fn lock_shared(&self) {
        if !self.try_lock_shared() {
            self.conflict("shared");
        }
    }

    fn try_lock_shared(&self) -> bool {
        let state = self.state.get();
        if state == EXCLUSIVE {
            return false;
        }
        self.state.set(state + 1);
        true
    }

    unsafe fn unlock_shared(&self) {
        debug_assert!(self.state.get() > 0);
        self.state.set(self.state.get() - 1);
    }

    fn lock_exclusive(&self) {
        if !self.try_lock_exclusive() {
            self.conflict("exclusive");
        }
    }

    fn try_lock_exclusive(&self) -> bool {
        if self.state.get() != 0 {
            return false;
        }
        self.state.set(EXCLUSIVE);
        true
    }

    unsafe fn unlock_exclusive(&self) {
        debug_assert!(self.is_held_exclusive());
        self.state.set(0);
    }
}
