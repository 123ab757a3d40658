// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target checking the const layer against the generic layer.
//!
//! The two layers are separate recursions over the same rules. They must
//! return the same indices on every input.

#![no_main]

use arbitrary::Arbitrary;
use cxalgo::konst::u8s;
use cxalgo::{
    adjacent_find, bounds, count, find, find_first_of, mismatch_bounded, search, search_n,
};
use libfuzzer_sys::fuzz_target;

const MAX_LEN: usize = 256;

#[derive(Debug, Arbitrary)]
struct LayerInput {
    data: Vec<u8>,
    other: Vec<u8>,
    value: u8,
    count: u8,
}

fuzz_target!(|input: LayerInput| {
    if input.data.len() > MAX_LEN || input.other.len() > MAX_LEN {
        return;
    }
    let data: Vec<u8> = input.data.iter().map(|b| b % 3).collect();
    let other: Vec<u8> = input.other.iter().take(8).map(|b| b % 3).collect();
    let value = input.value % 3;
    let run = usize::from(input.count % 8);

    let (first, last) = bounds(&data);
    let (o_first, o_last) = bounds(&other);

    assert_eq!(u8s::count(&data, value), count(first, last, &value));
    assert_eq!(u8s::find(&data, value), find(first, last, &value).index());
    assert_eq!(u8s::adjacent_find(&data), adjacent_find(first, last).index());
    assert_eq!(
        u8s::search(&data, &other),
        search(first, last, o_first, o_last).index()
    );
    assert_eq!(
        u8s::find_first_of(&data, &other),
        find_first_of(first, last, o_first, o_last).index()
    );
    assert_eq!(
        u8s::search_n(&data, run, value),
        search_n(first, last, run, &value).index()
    );

    let pair = mismatch_bounded(first, last, o_first, o_last);
    let konst_pair = u8s::mismatch_bounded(&data, &other);
    assert_eq!(konst_pair.first, pair.first.index());
    assert_eq!(konst_pair.second, pair.second.index());
});
