//! Process-wide random index source
//!
//! Thin wrappers over the thread-local `rand` generator. Arrays use these for
//! `pop_rand`, `rand` and `shuffle` so that every random choice goes through
//! one place.

use rand::seq::{index, SliceRandom};
use rand::Rng;

/// Uniform random index in `[0, n)`
///
/// # Panics
///
/// Panics if `n` is zero.
#[track_caller]
pub fn intn(n: usize) -> usize {
    assert!(n > 0, "cannot pick a random index from an empty range");
    rand::thread_rng().gen_range(0..n)
}

/// Random permutation of `0..n`
///
/// # Examples
///
/// ```
/// let mut p = dynarray_core::random::perm(5);
/// p.sort_unstable();
/// assert_eq!(p, vec![0, 1, 2, 3, 4]);
/// ```
pub fn perm(n: usize) -> Vec<usize> {
    sample(n, n)
}

/// `amount` distinct indices from `0..n`, in random order
///
/// `amount` is clamped to `n`. This is the prefix of a random permutation of
/// `0..n`, drawn without building the whole permutation.
pub fn sample(n: usize, amount: usize) -> Vec<usize> {
    let amount = amount.min(n);
    if amount == 0 {
        return Vec::new();
    }
    index::sample(&mut rand::thread_rng(), n, amount).into_vec()
}

/// Uniform in-place permutation of a slice
pub fn shuffle<T>(items: &mut [T]) {
    items.shuffle(&mut rand::thread_rng());
}
