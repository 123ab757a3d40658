// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for `search`, `search_by` and `find_first_of`.
//!
//! The recursive search walks two ranges at once and bails out early when the
//! needle no longer fits. Off-by-one errors there show up as a wrong index or
//! a read past `last`, which panics on a slice cursor.

#![no_main]

use arbitrary::Arbitrary;
use cxalgo::testing::{oracle_find_first_of, oracle_search};
use cxalgo::{bounds, find_first_of, search, search_by};
use libfuzzer_sys::fuzz_target;

/// Recursion depth is linear in the haystack length.
const MAX_HAY: usize = 512;

#[derive(Debug, Arbitrary)]
struct SearchInput {
    hay: Vec<u8>,
    needle: Vec<u8>,
    /// Folds the alphabet so matches are common.
    modulus: u8,
}

fuzz_target!(|input: SearchInput| {
    if input.hay.len() > MAX_HAY {
        return;
    }
    let modulus = input.modulus.max(1);
    let hay: Vec<u8> = input.hay.iter().map(|b| b % modulus).collect();
    let needle: Vec<u8> = input.needle.iter().take(16).map(|b| b % modulus).collect();

    let (first1, last1) = bounds(&hay);
    let (first2, last2) = bounds(&needle);

    // Property 1: search agrees with the windows oracle
    let found = search(first1, last1, first2, last2);
    assert_eq!(
        found.index(),
        oracle_search(&hay, &needle),
        "search disagrees with oracle for needle {:?}",
        needle
    );

    // Property 2: a hit really is a match
    if found != last1 {
        assert_eq!(&hay[found.index()..found.index() + needle.len()], &needle[..]);
    }

    // Property 3: search_by with == is search
    let by = search_by(first1, last1, first2, last2, |h: &u8, n: &u8| h == n);
    assert_eq!(by, found);

    // Property 4: find_first_of agrees with its oracle
    assert_eq!(
        find_first_of(first1, last1, first2, last2).index(),
        oracle_find_first_of(&hay, &needle)
    );
});
