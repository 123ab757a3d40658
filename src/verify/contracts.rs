// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the algorithm preconditions.
//!
//! Every algorithm in this crate assumes its ranges are well formed. None of
//! them check, and none of them report failure. These functions are the
//! optional safety net:
//!
//! 1. Active in **debug builds**, or in any build with the `contracts` feature
//! 2. **Zero-cost** otherwise (the condition is `cfg!`-gated away)
//! 3. Panic with a `"Contract violation: ..."` message; they never return an error
//!
//! The algorithms call them at their public entry points wherever the marker
//! type can measure distance. Plain forward markers cannot be checked without
//! walking the range, so they are not.
//!
//! # Contract Table
//!
//! | Contract Function           | Precondition                                  |
//! |-----------------------------|-----------------------------------------------|
//! | `check_range_well_formed`   | `last` reachable from `first` (`last - first >= 0`) |
//! | `check_lockstep_capacity`   | range 2 at least as long as range 1           |

use crate::cursor::Distance;

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// The worked examples from the crate docs, evaluated by the const layer.
/// If any of these regress, the crate does not build.
const _: () = {
    use crate::konst::{i32s, u32s};

    const HAYSTACK: [i32; 5] = [1, 2, 3, 4, 5];
    assert!(i32s::search(&HAYSTACK, &[3, 4]) == 2);
    assert!(i32s::search(&HAYSTACK, &[9]) == HAYSTACK.len());
    assert!(i32s::search(&[1, 2], &[1, 2, 3]) == 2);

    const RUNS: [u32; 7] = [7, 7, 1, 7, 7, 7, 2];
    assert!(u32s::search_n(&RUNS, 3, 7) == 3);

    assert!(i32s::accumulate(&[1, 2, 3, 4], 0) == 10);
    assert!(i32s::inner_product(&[1, 2, 3], &[4, 5, 6], 0) == 32);
    assert!(i32s::equal_bounded(&[1, 2, 3], &[1, 2, 3]));
    assert!(!i32s::equal_bounded(&[1, 2, 3], &[1, 2, 4]));
};

macro_rules! contract {
    ($cond:expr, $($arg:tt)+) => {
        if cfg!(any(debug_assertions, feature = "contracts")) {
            assert!($cond, $($arg)+);
        }
    };
}

// ============================================================================
// RANGE CONTRACTS
// ============================================================================

/// Check that `[first, last)` is a well-formed half-open range.
///
/// # Panics (debug builds or `contracts` feature)
/// Panics if `last` lies before `first`.
#[inline]
pub fn check_range_well_formed<C: Distance>(first: &C, last: &C) {
    let distance = first.distance(last);
    contract!(
        distance >= 0,
        "Contract violation: range well-formed - last lies {} positions before first",
        -distance
    );
}

/// Check that a lock-step partner range is long enough.
///
/// `equal`, `mismatch` and `inner_product` only take the start of range 2
/// and read as many elements from it as range 1 holds. Callers that do know
/// where range 2 ends can check that here before calling them.
///
/// # Panics (debug builds or `contracts` feature)
/// Panics if range 2 is shorter than range 1, or either range is inverted.
#[inline]
pub fn check_lockstep_capacity<C1: Distance, C2: Distance>(
    first1: &C1,
    last1: &C1,
    first2: &C2,
    last2: &C2,
) {
    check_range_well_formed(first1, last1);
    check_range_well_formed(first2, last2);

    let len1 = first1.distance(last1);
    let len2 = first2.distance(last2);
    contract!(
        len2 >= len1,
        "Contract violation: lock-step capacity - range 2 holds {} elements, range 1 needs {}",
        len2,
        len1
    );
}
