//! Marker types other than `SliceCursor`.
//!
//! The algorithms only see `Position` / `Distance`, so they must work the
//! same over generated sequences (owned items) and forward-only lists
//! (no distance).

use cxalgo::{
    accumulate, adjacent_find, all_of, count_if, equal_by, find, find_first_of, inner_product,
    mismatch_by, search, search_n, Distance, Position,
};

/// The arithmetic sequence `start, start + step, ...`, indexed by `n`.
/// Reads produce owned values.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Stepper {
    start: i64,
    step: i64,
    n: isize,
}

impl Stepper {
    fn range(start: i64, step: i64, len: isize) -> (Self, Self) {
        (Stepper { start, step, n: 0 }, Stepper { start, step, n: len })
    }
}

impl Position for Stepper {
    type Item = i64;

    fn read(&self) -> i64 {
        self.start + self.step * self.n as i64
    }

    fn advance(&self) -> Self {
        Stepper { n: self.n + 1, ..*self }
    }
}

impl Distance for Stepper {
    fn distance(&self, last: &Self) -> isize {
        last.n - self.n
    }
}

/// A singly linked list node, borrowed.
#[derive(Debug)]
struct Node {
    value: u32,
    next: Option<Box<Node>>,
}

/// Forward-only cursor: `None` is the end.
#[derive(Clone, Copy, Debug)]
struct ListCursor<'a>(Option<&'a Node>);

impl PartialEq for ListCursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self.0, other.0) {
            (Some(a), Some(b)) => core::ptr::eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<'a> Position for ListCursor<'a> {
    type Item = u32;

    fn read(&self) -> u32 {
        self.0.map_or(0, |node| node.value)
    }

    fn advance(&self) -> Self {
        ListCursor(self.0.and_then(|node| node.next.as_deref()))
    }
}

fn list(values: &[u32]) -> Option<Box<Node>> {
    values
        .iter()
        .rev()
        .fold(None, |next, &value| Some(Box::new(Node { value, next })))
}

fn cursors(head: &Option<Box<Node>>) -> (ListCursor<'_>, ListCursor<'_>) {
    (ListCursor(head.as_deref()), ListCursor(None))
}

fn nth(cursor: ListCursor<'_>, n: usize) -> ListCursor<'_> {
    (0..n).fold(cursor, |c, _| c.advance())
}

// ============================================================================
// GENERATED SEQUENCE
// ============================================================================

#[test]
fn stepper_find_by_value() {
    // 0, 3, 6, 9, 12, 15
    let (first, last) = Stepper::range(0, 3, 6);
    assert_eq!(find(first, last, 9i64).n, 3);
    assert_eq!(find(first, last, 10i64), last);
}

#[test]
fn stepper_folds() {
    // 1, 2, ..., 10
    let (first, last) = Stepper::range(1, 1, 10);
    assert_eq!(accumulate(first, last, 0i64), 55);
    assert_eq!(count_if(first, last, |x| x % 2 == 0), 5);
    assert!(all_of(first, last, |x| x > 0));

    // (1, 2, 3) . (2, 4, 6) = 28
    let (a, a_end) = Stepper::range(1, 1, 3);
    let (b, _) = Stepper::range(2, 2, 3);
    assert_eq!(inner_product(a, a_end, b, 0i64), 28);
}

#[test]
fn stepper_search_uses_distance() {
    let (first, last) = Stepper::range(0, 5, 8);
    let (n_first, n_last) = Stepper::range(15, 5, 3);
    assert_eq!(search(first, last, n_first, n_last).n, 3);

    // A constant sequence has every run
    let (c_first, c_last) = Stepper::range(4, 0, 6);
    assert_eq!(search_n(c_first, c_last, 6, 4i64).n, 0);
    assert_eq!(search_n(c_first, c_last, 7, 4i64), c_last);
}

#[test]
fn stepper_against_slice() {
    let data = [0i64, 2, 4, 7, 8];
    let (s_first, s_last) = cxalgo::bounds(&data);
    let (first, _) = Stepper::range(0, 2, 5);

    // Heterogeneous markers in lock step
    let pair = mismatch_by(s_first, s_last, first, |a: &i64, b: i64| *a == b);
    assert_eq!(pair.first.index(), 3);
    assert_eq!(pair.second.n, 3);
    assert!(!equal_by(s_first, s_last, first, |a: &i64, b: i64| *a == b));
}

// ============================================================================
// FORWARD-ONLY LIST
// ============================================================================

#[test]
fn list_scan() {
    let head = list(&[4, 8, 15, 16, 23, 42]);
    let (first, last) = cursors(&head);

    assert_eq!(find(first, last, 16u32), nth(first, 3));
    assert_eq!(find(first, last, 5u32), last);
    assert_eq!(count_if(first, last, |x| x % 2 == 1), 2);
}

#[test]
fn list_adjacent_and_first_of() {
    let head = list(&[1, 2, 3, 3, 4]);
    let (first, last) = cursors(&head);
    assert_eq!(adjacent_find(first, last), nth(first, 2));

    let probes = list(&[9, 4, 2]);
    let (p_first, p_last) = cursors(&probes);
    assert_eq!(find_first_of(first, last, p_first, p_last), nth(first, 1));
}

#[test]
fn empty_list_is_empty_range() {
    let head = list(&[]);
    let (first, last) = cursors(&head);
    assert_eq!(first, last);
    assert_eq!(find(first, last, 1u32), last);
    assert_eq!(adjacent_find(first, last), last);
}
