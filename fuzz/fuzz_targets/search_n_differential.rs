// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for `search_n`.
//!
//! `search_n` carries a run start and a run length through the recursion and
//! restarts after every mismatch. This checks the result against a plain
//! scan and checks the run it reports.

#![no_main]

use arbitrary::Arbitrary;
use cxalgo::testing::oracle_search_n;
use cxalgo::{bounds, search_n, search_n_by};
use libfuzzer_sys::fuzz_target;

const MAX_LEN: usize = 512;

#[derive(Debug, Arbitrary)]
struct RunInput {
    data: Vec<u8>,
    count: u8,
    value: u8,
}

fuzz_target!(|input: RunInput| {
    if input.data.len() > MAX_LEN {
        return;
    }
    // Two-symbol alphabet: long runs are likely
    let data: Vec<u8> = input.data.iter().map(|b| b & 1).collect();
    let value = input.value & 1;
    let count = usize::from(input.count % 32);

    let (first, last) = bounds(&data);
    let found = search_n(first, last, count, &value);

    assert_eq!(
        found.index(),
        oracle_search_n(&data, count, &value),
        "search_n({}, {}) disagrees with oracle",
        count,
        value
    );

    if found != last {
        assert!(data[found.index()..found.index() + count].iter().all(|x| *x == value));
    }

    let by = search_n_by(first, last, count, value, |x: &u8, v: &u8| x == v);
    assert_eq!(by, found);
});
