// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Searches built out of the scan and comparison primitives.
//!
//! - `find_first_of`: first element of range 1 that matches anything in range 2.
//!   An inner existence scan over range 2 per candidate, O(|r1|·|r2|).
//! - `search`: first occurrence of a needle range. Checks that the needle
//!   still fits before comparing anything, so it never reads past `last1`.
//! - `search_n`: first run of `count` elements matching a value.
//! - `adjacent_find`: first element that matches its successor.
//!
//! All of them return the range's `last` when there is nothing to find.
//! Binary predicates always receive the range-1 (haystack) element first.

use crate::compare::equal_from;
use crate::cursor::{Distance, Position};
use crate::scan::find;
use crate::verify::contracts::check_range_well_formed;

// ============================================================================
// FIND FIRST OF
// ============================================================================

/// First position in `[first1, last1)` whose element equals any element of
/// `[first2, last2)`, or `last1`.
///
/// ```
/// use cxalgo::{bounds, find_first_of};
///
/// let text = *b"hello, world";
/// let (first, last) = bounds(&text);
/// let (sep, sep_end) = bounds(b" ,;");
/// assert_eq!(find_first_of(first, last, sep, sep_end).index(), 5);
/// ```
pub fn find_first_of<A, B>(first1: A, last1: A, first2: B, last2: B) -> A
where
    A: Position,
    B: Position,
    B::Item: PartialEq<A::Item>,
{
    find_first_of_from(first1, &last1, &first2, &last2)
}

fn find_first_of_from<A, B>(first1: A, last1: &A, first2: &B, last2: &B) -> A
where
    A: Position,
    B: Position,
    B::Item: PartialEq<A::Item>,
{
    if first1 == *last1 || find(first2.clone(), last2.clone(), first1.read()) != *last2 {
        first1
    } else {
        find_first_of_from(first1.advance(), last1, first2, last2)
    }
}

/// [`find_first_of`] where "matches" is `pred(element1, element2)`.
pub fn find_first_of_by<A, B, P>(first1: A, last1: A, first2: B, last2: B, mut pred: P) -> A
where
    A: Position,
    B: Position,
    P: FnMut(A::Item, B::Item) -> bool,
{
    find_first_of_by_from(first1, &last1, &first2, &last2, &mut pred)
}

fn find_first_of_by_from<A, B, P>(first1: A, last1: &A, first2: &B, last2: &B, pred: &mut P) -> A
where
    A: Position,
    B: Position,
    P: FnMut(A::Item, B::Item) -> bool,
{
    if first1 == *last1 || contains_match(first2.clone(), last2, &first1, pred) {
        first1
    } else {
        find_first_of_by_from(first1.advance(), last1, first2, last2, pred)
    }
}

/// Does any element of `[first, last)` match the element at `probe`?
fn contains_match<A, B, P>(first: B, last: &B, probe: &A, pred: &mut P) -> bool
where
    A: Position,
    B: Position,
    P: FnMut(A::Item, B::Item) -> bool,
{
    if first == *last {
        false
    } else {
        pred(probe.read(), first.read()) || contains_match(first.advance(), last, probe, pred)
    }
}

// ============================================================================
// SUBSEQUENCE SEARCH
// ============================================================================

/// Start of the first occurrence of `[first2, last2)` in `[first1, last1)`, or `last1`.
///
/// An empty needle matches at `first1`.
pub fn search<A, B>(first1: A, last1: A, first2: B, last2: B) -> A
where
    A: Distance,
    B: Distance,
    A::Item: PartialEq<B::Item>,
{
    search_by(first1, last1, first2, last2, |hay: A::Item, needle: B::Item| {
        hay == needle
    })
}

/// [`search`] with a caller-supplied equivalence, called as `pred(hay, needle)`.
pub fn search_by<A, B, P>(first1: A, last1: A, first2: B, last2: B, mut pred: P) -> A
where
    A: Distance,
    B: Distance,
    P: FnMut(A::Item, B::Item) -> bool,
{
    check_range_well_formed(&first1, &last1);
    check_range_well_formed(&first2, &last2);

    let needle_len = first2.distance(&last2);
    search_from(first1, &last1, &first2, &last2, needle_len, &mut pred)
}

fn search_from<A, B, P>(
    first1: A,
    last1: &A,
    first2: &B,
    last2: &B,
    needle_len: isize,
    pred: &mut P,
) -> A
where
    A: Distance,
    B: Distance,
    P: FnMut(A::Item, B::Item) -> bool,
{
    // The fit check must come first: the window comparison reads
    // needle_len elements starting at first1.
    if needle_len > first1.distance(last1) {
        last1.clone()
    } else if equal_from(
        first2.clone(),
        last2,
        first1.clone(),
        &mut |needle: B::Item, hay: A::Item| pred(hay, needle),
    ) {
        first1
    } else {
        search_from(first1.advance(), last1, first2, last2, needle_len, pred)
    }
}

// ============================================================================
// RUN SEARCH
// ============================================================================

/// Start of the first run of `count` consecutive elements equal to `value`, or `last`.
///
/// A `count` of zero matches at `first`.
///
/// ```
/// use cxalgo::{bounds, search_n};
///
/// let data = [7, 7, 1, 7, 7, 7, 2];
/// let (first, last) = bounds(&data);
/// assert_eq!(search_n(first, last, 3, &7).index(), 3);
/// assert_eq!(search_n(first, last, 4, &7), last);
/// ```
pub fn search_n<C, V>(first: C, last: C, count: usize, value: V) -> C
where
    C: Distance,
    C::Item: PartialEq<V>,
{
    search_n_by(first, last, count, value, |item: C::Item, value: &V| {
        item == *value
    })
}

/// [`search_n`] where an element belongs to the run when `pred(element, &value)`.
pub fn search_n_by<C, V, P>(first: C, last: C, count: usize, value: V, mut pred: P) -> C
where
    C: Distance,
    P: FnMut(C::Item, &V) -> bool,
{
    check_range_well_formed(&first, &last);

    let run = RunState {
        start: first.clone(),
        sofar: 0,
    };
    search_n_from(first, &last, count, &value, &mut pred, run)
}

/// The run being extended: where it began and how long it is so far.
struct RunState<C> {
    start: C,
    sofar: usize,
}

fn search_n_from<C, V, P>(
    first: C,
    last: &C,
    count: usize,
    value: &V,
    pred: &mut P,
    run: RunState<C>,
) -> C
where
    C: Distance,
    P: FnMut(C::Item, &V) -> bool,
{
    // Elements left cannot complete the current run.
    let remaining = usize::try_from(first.distance(last)).unwrap_or(0);
    if count - run.sofar > remaining {
        return last.clone();
    }

    if run.sofar == count {
        run.start
    } else if pred(first.read(), value) {
        let run = RunState {
            start: run.start,
            sofar: run.sofar + 1,
        };
        search_n_from(first.advance(), last, count, value, pred, run)
    } else {
        // Every window starting inside the failed run covers this element,
        // so the next candidate start is the element after it.
        let next = first.advance();
        let run = RunState {
            start: next.clone(),
            sofar: 0,
        };
        search_n_from(next, last, count, value, pred, run)
    }
}

// ============================================================================
// ADJACENT PAIRS
// ============================================================================

/// First position whose element equals its successor, or `last`.
pub fn adjacent_find<C>(first: C, last: C) -> C
where
    C: Position,
    C::Item: PartialEq,
{
    adjacent_find_by(first, last, |a: C::Item, b: C::Item| a == b)
}

/// First position `i` with `pred(*i, *(i + 1))`, or `last`.
///
/// Ranges shorter than two elements have no pairs and return `last`.
pub fn adjacent_find_by<C, P>(first: C, last: C, mut pred: P) -> C
where
    C: Position,
    P: FnMut(C::Item, C::Item) -> bool,
{
    adjacent_find_from(first, &last, &mut pred)
}

fn adjacent_find_from<C, P>(first: C, last: &C, pred: &mut P) -> C
where
    C: Position,
    P: FnMut(C::Item, C::Item) -> bool,
{
    if first == *last {
        return first;
    }

    let next = first.advance();
    if next == *last {
        next
    } else if pred(first.read(), next.read()) {
        first
    } else {
        adjacent_find_from(next, last, pred)
    }
}
