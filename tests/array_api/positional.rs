//! Positional Mutation Tests
//!
//! Tests for index-based insertion and removal and for both-end push/pop:
//! - LIFO behavior at each end
//! - Order of multi-value pushes
//! - Boundary vs interior removal equivalence

use crate::*;

fn check_push_pop_right_lifo<M: LockMode>() {
    let arr: DynamicArray<i32, M> = array(vec![1, 2]);
    let before = arr.len();
    arr.push_right([42]);
    assert_eq!(arr.pop_right(), 42);
    assert_eq!(arr.len(), before);
}

#[test]
fn test_push_pop_right_lifo() {
    test_across_lock_modes!(check_push_pop_right_lifo);
}

fn check_push_pop_left_lifo<M: LockMode>() {
    let arr: DynamicArray<i32, M> = array(vec![1, 2]);
    arr.push_left([42]);
    assert_eq!(arr.pop_left(), 42);
    assert_eq!(arr.slice(), vec![1, 2]);
}

#[test]
fn test_push_pop_left_lifo() {
    test_across_lock_modes!(check_push_pop_left_lifo);
}

fn check_append_keeps_order<M: LockMode>() {
    let arr: DynamicArray<char, M> = array(vec!['x']);
    arr.append(['a', 'b', 'c']);
    assert!(arr.slice().ends_with(&['a', 'b', 'c']));

    arr.push_left(['p', 'q']);
    assert!(arr.slice().starts_with(&['p', 'q', 'x']));
}

#[test]
fn test_append_keeps_order() {
    test_across_lock_modes!(check_append_keeps_order);
}

fn check_remove_matches_naive<M: LockMode>() {
    for len in 1..9usize {
        for index in 0..len {
            let mut naive: Vec<usize> = (0..len).collect();
            let arr: DynamicArray<usize, M> = array(naive.clone());

            assert_eq!(arr.remove(index), naive.remove(index));
            assert_eq!(arr.slice(), naive);
        }
    }
}

/// Removing at index 0, the last index, or anywhere else gives the same
/// result as a plain vector removal
#[test]
fn test_remove_matches_naive() {
    test_across_lock_modes!(check_remove_matches_naive);
}

fn check_remove_after_wraparound<M: LockMode>() {
    // push_left on a non-empty array wraps the ring buffer
    let arr: DynamicArray<i32, M> = array(vec![3, 4, 5]);
    arr.push_left([1, 2]);
    assert_eq!(arr.remove(3), 4);
    assert_eq!(arr.remove(0), 1);
    assert_eq!(arr.remove(2), 5);
    assert_eq!(arr.slice(), vec![2, 3]);
}

#[test]
fn test_remove_after_wraparound() {
    test_across_lock_modes!(check_remove_after_wraparound);
}

fn check_insert_before_and_after<M: LockMode>() {
    let arr: DynamicArray<&str, M> = array(vec!["b", "d"]);
    arr.insert_before(0, "a")
        .insert_after(1, "c")
        .insert_after(3, "e")
        .insert_before(5, "f");
    assert_eq!(arr.join(""), "abcdef");
}

#[test]
fn test_insert_before_and_after() {
    test_across_lock_modes!(check_insert_before_and_after);
}

#[test]
fn test_pop_until_empty() {
    let arr = DynamicArray::from_vec((1..=4).collect::<Vec<i32>>());
    let mut popped = Vec::new();
    while !arr.is_empty() {
        popped.push(if popped.len() % 2 == 0 {
            arr.pop_left()
        } else {
            arr.pop_right()
        });
    }
    assert_eq!(popped, vec![1, 4, 2, 3]);
}

#[test]
#[should_panic(expected = "index out of bounds: the len is 3 but the index is 3")]
fn test_remove_past_end_panics() {
    let arr = DynamicArray::from_vec(vec![1, 2, 3]);
    arr.remove(3);
}

#[test]
#[should_panic(expected = "pop_right called on an empty array")]
fn test_pop_right_on_empty_panics() {
    let arr = DynamicArray::from_vec_unsafe(Vec::<i32>::new());
    arr.pop_right();
}
