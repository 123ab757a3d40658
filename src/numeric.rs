// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Left folds.
//!
//! The accumulator is threaded through the recursion as a parameter, so the
//! fold order is fixed: `op(op(op(init, x0), x1), x2)`. Overflow behaves as
//! the equivalent `+`/`*` expression written out by hand.

use core::ops::{Add, Mul};

use crate::cursor::Position;

/// `init + x0 + x1 + ...` over `[first, last)`. An empty range returns `init`.
///
/// ```
/// use cxalgo::{accumulate, accumulate_by, bounds};
///
/// let data = [1, 2, 3, 4];
/// let (first, last) = bounds(&data);
/// assert_eq!(accumulate(first, last, 0), 10);
/// assert_eq!(accumulate_by(first, last, 1, |acc, x| acc * x), 24);
/// ```
pub fn accumulate<C, T>(first: C, last: C, init: T) -> T
where
    C: Position,
    T: Add<C::Item, Output = T>,
{
    accumulate_by(first, last, init, |acc: T, item: C::Item| acc + item)
}

/// Left fold of `[first, last)` with `op`, starting from `init`.
pub fn accumulate_by<C, T, F>(first: C, last: C, init: T, mut op: F) -> T
where
    C: Position,
    F: FnMut(T, C::Item) -> T,
{
    accumulate_from(first, &last, init, &mut op)
}

fn accumulate_from<C, T, F>(first: C, last: &C, acc: T, op: &mut F) -> T
where
    C: Position,
    F: FnMut(T, C::Item) -> T,
{
    if first == *last {
        acc
    } else {
        let acc = op(acc, first.read());
        accumulate_from(first.advance(), last, acc, op)
    }
}

/// `value + a0*b0 + a1*b1 + ...` over `[first1, last1)` and the range at `first2`.
///
/// # Preconditions
/// The range starting at `first2` holds at least `last1 - first1` elements.
pub fn inner_product<A, B, T>(first1: A, last1: A, first2: B, value: T) -> T
where
    A: Position,
    B: Position,
    A::Item: Mul<B::Item>,
    T: Add<<A::Item as Mul<B::Item>>::Output, Output = T>,
{
    inner_product_by(
        first1,
        last1,
        first2,
        value,
        |acc: T, product: <A::Item as Mul<B::Item>>::Output| acc + product,
        |a: A::Item, b: B::Item| a * b,
    )
}

/// Generalized inner product: `value = fold(value, combine(a_i, b_i))`.
///
/// `fold` plays the role of `+` and `combine` the role of `*`.
pub fn inner_product_by<A, B, T, R, F, G>(
    first1: A,
    last1: A,
    first2: B,
    value: T,
    mut fold: F,
    mut combine: G,
) -> T
where
    A: Position,
    B: Position,
    F: FnMut(T, R) -> T,
    G: FnMut(A::Item, B::Item) -> R,
{
    inner_product_from(first1, &last1, first2, value, &mut fold, &mut combine)
}

fn inner_product_from<A, B, T, R, F, G>(
    first1: A,
    last1: &A,
    first2: B,
    acc: T,
    fold: &mut F,
    combine: &mut G,
) -> T
where
    A: Position,
    B: Position,
    F: FnMut(T, R) -> T,
    G: FnMut(A::Item, B::Item) -> R,
{
    if first1 == *last1 {
        acc
    } else {
        let acc = fold(acc, combine(first1.read(), first2.read()));
        inner_product_from(first1.advance(), last1, first2.advance(), acc, fold, combine)
    }
}
