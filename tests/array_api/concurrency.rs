//! Concurrency Tests
//!
//! Tests for thread safety of safe-mode arrays:
//! - No lost updates under concurrent pushes
//! - Readers see consistent snapshots
//! - lock_func makes read-modify-write atomic
//! - Merges in opposite directions and self-merges do not deadlock
//! - A panic while holding a permission does not wedge the array

use crate::*;
use std::sync::{Arc, Barrier};
use std::thread;

const NUM_THREADS: usize = 8;

/// N threads each push one distinct value; no update is lost
#[test]
fn test_concurrent_push_right_no_lost_updates() {
    let arr = Arc::new(DynamicArray::from_vec(vec![usize::MAX; 3]));
    let barrier = Arc::new(Barrier::new(NUM_THREADS));

    let handles: Vec<_> = (0..NUM_THREADS)
        .map(|i| {
            let arr = Arc::clone(&arr);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                arr.push_right([i]);
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(arr.len(), 3 + NUM_THREADS);
    for i in 0..NUM_THREADS {
        assert!(arr.contains(&i), "value {} should have been pushed", i);
    }
}

#[test]
fn test_concurrent_pushes_at_both_ends() {
    const PUSHES: usize = 200;

    let arr: Arc<DynamicArray<usize>> = Arc::new(DynamicArray::default());
    let barrier = Arc::new(Barrier::new(NUM_THREADS));

    let handles: Vec<_> = (0..NUM_THREADS)
        .map(|t| {
            let arr = Arc::clone(&arr);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for j in 0..PUSHES {
                    let value = t * PUSHES + j;
                    if t % 2 == 0 {
                        arr.push_left([value]);
                    } else {
                        arr.append([value]);
                    }
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }

    let mut values = arr.slice();
    values.sort_unstable();
    assert_eq!(values, (0..NUM_THREADS * PUSHES).collect::<Vec<usize>>());
}

/// Pairs pushed together with one call are never split by other writers
#[test]
fn test_multi_value_push_is_atomic() {
    let arr: Arc<DynamicArray<(usize, u8)>> = Arc::new(DynamicArray::default());
    let barrier = Arc::new(Barrier::new(NUM_THREADS));

    let handles: Vec<_> = (0..NUM_THREADS)
        .map(|t| {
            let arr = Arc::clone(&arr);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..100 {
                    arr.push_right([(t, 0), (t, 1)]);
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }

    let values = arr.slice();
    assert_eq!(values.len(), NUM_THREADS * 200);
    for pair in values.chunks(2) {
        assert_eq!(pair[0].0, pair[1].0);
        assert_eq!((pair[0].1, pair[1].1), (0, 1));
    }
}

#[test]
fn test_lock_func_read_modify_write() {
    const INCREMENTS: usize = 250;

    let arr = Arc::new(DynamicArray::from_vec(vec![0u64]));
    let barrier = Arc::new(Barrier::new(NUM_THREADS));

    let handles: Vec<_> = (0..NUM_THREADS)
        .map(|_| {
            let arr = Arc::clone(&arr);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..INCREMENTS {
                    arr.lock_func(|elements| elements[0] += 1);
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(arr.get(0), (NUM_THREADS * INCREMENTS) as u64);
}

/// Readers never observe a half-applied set_array
#[test]
fn test_readers_see_whole_replacements() {
    let arr = Arc::new(DynamicArray::from_vec(vec![0u32; 16]));
    let barrier = Arc::new(Barrier::new(NUM_THREADS + 1));

    let writer = {
        let arr = Arc::clone(&arr);
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            for round in 1..=200u32 {
                arr.set_array(vec![round; 16]);
            }
        })
    };

    let readers: Vec<_> = (0..NUM_THREADS)
        .map(|_| {
            let arr = Arc::clone(&arr);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..200 {
                    let snapshot = arr.slice();
                    assert_eq!(snapshot.len(), 16);
                    assert!(snapshot.iter().all(|v| *v == snapshot[0]));
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for h in readers {
        h.join().unwrap();
    }
    assert_eq!(arr.slice(), vec![200; 16]);
}

#[test]
fn test_opposite_merges_complete() {
    let a = Arc::new(DynamicArray::from_vec(vec![1u8; 4]));
    let b = Arc::new(DynamicArray::from_vec(vec![2u8; 4]));
    let barrier = Arc::new(Barrier::new(2));

    let forward = {
        let (a, b, barrier) = (Arc::clone(&a), Arc::clone(&b), Arc::clone(&barrier));
        thread::spawn(move || {
            barrier.wait();
            for _ in 0..100 {
                a.merge(&*b);
                a.set_array(vec![1; 4]);
            }
        })
    };
    let backward = {
        let (a, b, barrier) = (Arc::clone(&a), Arc::clone(&b), Arc::clone(&barrier));
        thread::spawn(move || {
            barrier.wait();
            for _ in 0..100 {
                b.merge(&*a);
                b.set_array(vec![2; 4]);
            }
        })
    };

    forward.join().unwrap();
    backward.join().unwrap();
    assert_eq!(a.slice(), vec![1; 4]);
    assert_eq!(b.slice(), vec![2; 4]);
}

#[test]
fn test_concurrent_self_merge() {
    let arr = Arc::new(DynamicArray::from_vec(vec![7u8]));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let arr = Arc::clone(&arr);
            thread::spawn(move || {
                arr.merge(&*arr);
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
    // Each self-merge doubles the length, in whatever order they ran
    assert_eq!(arr.len(), 16);
    assert!(arr.slice().iter().all(|v| *v == 7));
}

#[test]
fn test_panic_in_other_thread_releases_lock() {
    let arr = Arc::new(DynamicArray::from_vec(vec![3, 1, 2]));

    let panicking = {
        let arr = Arc::clone(&arr);
        thread::spawn(move || {
            arr.sort_by(|_, _| panic!("comparator failure"));
        })
    };
    assert!(panicking.join().is_err());

    // The exclusive permission was released during unwinding
    arr.sort();
    assert_eq!(arr.slice(), vec![1, 2, 3]);
}

#[test]
fn test_pop_rand_concurrent_drain() {
    const TOTAL: usize = 400;

    let arr = Arc::new(DynamicArray::from_vec((0..TOTAL).collect::<Vec<usize>>()));
    let handles: Vec<_> = (0..NUM_THREADS)
        .map(|_| {
            let arr = Arc::clone(&arr);
            thread::spawn(move || {
                let mut taken = Vec::new();
                while let Ok(value) = arr.try_pop_rand() {
                    taken.push(value);
                }
                taken
            })
        })
        .collect();

    let mut all: Vec<usize> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    all.sort_unstable();
    assert_eq!(all, (0..TOTAL).collect::<Vec<usize>>());
    assert!(arr.is_empty());
}
