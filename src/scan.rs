// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Counting, linear search and quantifiers.
//!
//! Every function here is one recursion: stop when `first == last` or when
//! the element at `first` decides the answer, otherwise recurse on
//! `first.advance()`. No loop, no mutable local, no allocation.
//!
//! "Not found" is `last`. The quantifiers are defined on top of that
//! sentinel rather than as recursions of their own, so they stop at the same
//! element the corresponding `find_*` stops at:
//!
//! | Quantifier | Definition                           |
//! |------------|--------------------------------------|
//! | `all_of`   | `find_if_not(first, last, p) == last` |
//! | `any_of`   | `find_if(first, last, p) != last`     |
//! | `none_of`  | `find_if(first, last, p) == last`     |

use crate::cursor::Position;

// ============================================================================
// COUNTING
// ============================================================================

/// Number of elements in `[first, last)` equal to `value`.
///
/// ```
/// use cxalgo::{bounds, count};
///
/// let data = [1, 3, 1, 1, 2];
/// let (first, last) = bounds(&data);
/// assert_eq!(count(first, last, &1), 3);
/// ```
pub fn count<C, V>(first: C, last: C, value: V) -> usize
where
    C: Position,
    C::Item: PartialEq<V>,
{
    count_if(first, last, |item: C::Item| item == value)
}

/// Number of elements in `[first, last)` satisfying `pred`.
pub fn count_if<C, P>(first: C, last: C, mut pred: P) -> usize
where
    C: Position,
    P: FnMut(C::Item) -> bool,
{
    count_if_from(first, &last, &mut pred, 0)
}

fn count_if_from<C, P>(first: C, last: &C, pred: &mut P, sofar: usize) -> usize
where
    C: Position,
    P: FnMut(C::Item) -> bool,
{
    if first == *last {
        sofar
    } else {
        let hit = usize::from(pred(first.read()));
        count_if_from(first.advance(), last, pred, sofar + hit)
    }
}

// ============================================================================
// LINEAR SEARCH
// ============================================================================

/// First position in `[first, last)` whose element equals `value`, or `last`.
pub fn find<C, V>(first: C, last: C, value: V) -> C
where
    C: Position,
    C::Item: PartialEq<V>,
{
    find_if(first, last, |item: C::Item| item == value)
}

/// First position in `[first, last)` whose element satisfies `pred`, or `last`.
pub fn find_if<C, P>(first: C, last: C, mut pred: P) -> C
where
    C: Position,
    P: FnMut(C::Item) -> bool,
{
    find_if_from(first, &last, &mut pred)
}

/// First position in `[first, last)` whose element fails `pred`, or `last`.
pub fn find_if_not<C, P>(first: C, last: C, mut pred: P) -> C
where
    C: Position,
    P: FnMut(C::Item) -> bool,
{
    find_if_from(first, &last, &mut |item: C::Item| !pred(item))
}

pub(crate) fn find_if_from<C, P>(first: C, last: &C, pred: &mut P) -> C
where
    C: Position,
    P: FnMut(C::Item) -> bool,
{
    if first == *last || pred(first.read()) {
        first
    } else {
        find_if_from(first.advance(), last, pred)
    }
}

// ============================================================================
// QUANTIFIERS
// ============================================================================

/// Does every element satisfy `pred`? Vacuously true on an empty range.
pub fn all_of<C, P>(first: C, last: C, pred: P) -> bool
where
    C: Position,
    P: FnMut(C::Item) -> bool,
{
    find_if_not(first, last.clone(), pred) == last
}

/// Does at least one element satisfy `pred`?
pub fn any_of<C, P>(first: C, last: C, pred: P) -> bool
where
    C: Position,
    P: FnMut(C::Item) -> bool,
{
    find_if(first, last.clone(), pred) != last
}

/// Does no element satisfy `pred`? True on an empty range.
pub fn none_of<C, P>(first: C, last: C, pred: P) -> bool
where
    C: Position,
    P: FnMut(C::Item) -> bool,
{
    find_if(first, last.clone(), pred) == last
}
