// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for `mismatch`, `equal` and their bounded forms.
//!
//! The bounded forms must never read past the shorter range. The single-bound
//! forms are only called when range 2 is long enough, which is their contract.

#![no_main]

use arbitrary::Arbitrary;
use cxalgo::testing::oracle_mismatch;
use cxalgo::{bounds, equal, equal_bounded, mismatch, mismatch_bounded};
use libfuzzer_sys::fuzz_target;

const MAX_LEN: usize = 512;

#[derive(Debug, Arbitrary)]
struct PairInput {
    a: Vec<u8>,
    b: Vec<u8>,
}

fuzz_target!(|input: PairInput| {
    let PairInput { a, b } = input;
    if a.len() > MAX_LEN || b.len() > MAX_LEN {
        return;
    }

    let (first1, last1) = bounds(&a);
    let (first2, last2) = bounds(&b);
    let expected = oracle_mismatch(&a, &b);

    // Property 1: bounded mismatch stops at the first difference or the shorter end
    let pair = mismatch_bounded(first1, last1, first2, last2);
    assert_eq!(pair.first.index(), expected);
    assert_eq!(pair.second.index(), expected);

    // Property 2: bounded equality is slice equality
    assert_eq!(equal_bounded(first1, last1, first2, last2), a == b);

    // Property 3: single-bound forms agree when range 2 is long enough
    if b.len() >= a.len() {
        assert_eq!(mismatch(first1, last1, first2).first.index(), expected);
        assert_eq!(equal(first1, last1, first2), b.starts_with(&a));
    }
});
