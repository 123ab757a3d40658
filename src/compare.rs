// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Element-by-element comparison of two ranges.
//!
//! Two overload shapes, each with an `==` form and a predicate (`_by`) form:
//!
//! - **Single bound** (`equal`, `mismatch`): range 1 is `[first1, last1)`,
//!   range 2 only has a start. The caller guarantees range 2 is at least as
//!   long as range 1.
//! - **Independently bounded** (`equal_bounded`, `mismatch_bounded`): both
//!   ranges carry their own end.
//!
//! `equal_bounded` compares lengths before touching any element. Ranges of
//! different length are unequal after one O(1) distance check, without
//! scanning the common prefix.

use crate::cursor::{Distance, Position};
use crate::pair::PositionPair;
use crate::verify::contracts::check_range_well_formed;

// ============================================================================
// EQUAL
// ============================================================================

/// Is `[first1, last1)` element-wise equal to the range starting at `first2`?
///
/// # Preconditions
/// The range starting at `first2` holds at least `last1 - first1` elements.
pub fn equal<A, B>(first1: A, last1: A, first2: B) -> bool
where
    A: Position,
    B: Position,
    A::Item: PartialEq<B::Item>,
{
    equal_by(first1, last1, first2, |a: A::Item, b: B::Item| a == b)
}

/// [`equal`] with a caller-supplied equivalence.
pub fn equal_by<A, B, P>(first1: A, last1: A, first2: B, mut pred: P) -> bool
where
    A: Position,
    B: Position,
    P: FnMut(A::Item, B::Item) -> bool,
{
    equal_from(first1, &last1, first2, &mut pred)
}

/// Are `[first1, last1)` and `[first2, last2)` the same length and element-wise equal?
///
/// ```
/// use cxalgo::{bounds, equal_bounded};
///
/// let (a, a_end) = bounds(&[1, 2, 3]);
/// let (b, b_end) = bounds(&[1, 2, 3, 4]);
/// assert!(!equal_bounded(a, a_end, b, b_end));
/// ```
pub fn equal_bounded<A, B>(first1: A, last1: A, first2: B, last2: B) -> bool
where
    A: Distance,
    B: Distance,
    A::Item: PartialEq<B::Item>,
{
    equal_bounded_by(first1, last1, first2, last2, |a: A::Item, b: B::Item| {
        a == b
    })
}

/// [`equal_bounded`] with a caller-supplied equivalence.
pub fn equal_bounded_by<A, B, P>(first1: A, last1: A, first2: B, last2: B, mut pred: P) -> bool
where
    A: Distance,
    B: Distance,
    P: FnMut(A::Item, B::Item) -> bool,
{
    check_range_well_formed(&first1, &last1);
    check_range_well_formed(&first2, &last2);

    if first1.distance(&last1) != first2.distance(&last2) {
        return false;
    }
    equal_from(first1, &last1, first2, &mut pred)
}

pub(crate) fn equal_from<A, B, P>(first1: A, last1: &A, first2: B, pred: &mut P) -> bool
where
    A: Position,
    B: Position,
    P: FnMut(A::Item, B::Item) -> bool,
{
    if first1 == *last1 {
        true
    } else if !pred(first1.read(), first2.read()) {
        false
    } else {
        equal_from(first1.advance(), last1, first2.advance(), pred)
    }
}

// ============================================================================
// MISMATCH
// ============================================================================

/// Positions of the first differing pair, or `(last1, first2 + (last1 - first1))`.
///
/// # Preconditions
/// Same as [`equal`].
pub fn mismatch<A, B>(first1: A, last1: A, first2: B) -> PositionPair<A, B>
where
    A: Position,
    B: Position,
    A::Item: PartialEq<B::Item>,
{
    mismatch_by(first1, last1, first2, |a: A::Item, b: B::Item| a == b)
}

/// [`mismatch`] with a caller-supplied equivalence.
pub fn mismatch_by<A, B, P>(first1: A, last1: A, first2: B, mut pred: P) -> PositionPair<A, B>
where
    A: Position,
    B: Position,
    P: FnMut(A::Item, B::Item) -> bool,
{
    mismatch_from(first1, &last1, first2, &mut pred)
}

fn mismatch_from<A, B, P>(first1: A, last1: &A, first2: B, pred: &mut P) -> PositionPair<A, B>
where
    A: Position,
    B: Position,
    P: FnMut(A::Item, B::Item) -> bool,
{
    if first1 == *last1 || !pred(first1.read(), first2.read()) {
        PositionPair::new(first1, first2)
    } else {
        mismatch_from(first1.advance(), last1, first2.advance(), pred)
    }
}

/// Positions of the first differing pair, stopping at whichever range ends first.
pub fn mismatch_bounded<A, B>(first1: A, last1: A, first2: B, last2: B) -> PositionPair<A, B>
where
    A: Position,
    B: Position,
    A::Item: PartialEq<B::Item>,
{
    mismatch_bounded_by(first1, last1, first2, last2, |a: A::Item, b: B::Item| {
        a == b
    })
}

/// [`mismatch_bounded`] with a caller-supplied equivalence.
pub fn mismatch_bounded_by<A, B, P>(
    first1: A,
    last1: A,
    first2: B,
    last2: B,
    mut pred: P,
) -> PositionPair<A, B>
where
    A: Position,
    B: Position,
    P: FnMut(A::Item, B::Item) -> bool,
{
    mismatch_bounded_from(first1, &last1, first2, &last2, &mut pred)
}

fn mismatch_bounded_from<A, B, P>(
    first1: A,
    last1: &A,
    first2: B,
    last2: &B,
    pred: &mut P,
) -> PositionPair<A, B>
where
    A: Position,
    B: Position,
    P: FnMut(A::Item, B::Item) -> bool,
{
    if first1 == *last1 || first2 == *last2 || !pred(first1.read(), first2.read()) {
        PositionPair::new(first1, first2)
    } else {
        mismatch_bounded_from(first1.advance(), last1, first2.advance(), last2, pred)
    }
}
