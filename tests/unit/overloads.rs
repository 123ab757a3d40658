//! The worked examples, run through every overload shape.

use cxalgo::{
    accumulate, accumulate_by, bounds, equal, equal_bounded, equal_bounded_by, equal_by,
    find_first_of, find_first_of_by, inner_product, inner_product_by, mismatch, mismatch_bounded,
    mismatch_by, search, search_by, search_n, search_n_by, Position, PositionPair, SliceCursor,
};

// ============================================================================
// EQUALITY AND MISMATCH
// ============================================================================

#[test]
fn equal_123_vs_123_and_124() {
    let r1 = [1, 2, 3];
    let same = [1, 2, 3];
    let differs = [1, 2, 4];
    let (first1, last1) = bounds(&r1);

    let (s_first, s_last) = bounds(&same);
    assert!(equal(first1, last1, s_first));
    assert!(equal_bounded(first1, last1, s_first, s_last));

    let (d_first, d_last) = bounds(&differs);
    assert!(!equal(first1, last1, d_first));
    assert!(!equal_bounded(first1, last1, d_first, d_last));
}

#[test]
fn mismatch_points_at_3_and_4() {
    let r1 = [1, 2, 3];
    let r2 = [1, 2, 4];
    let (first1, last1) = bounds(&r1);
    let (first2, last2) = bounds(&r2);

    let PositionPair { first, second } = mismatch(first1, last1, first2);
    assert_eq!(*first.read(), 3);
    assert_eq!(*second.read(), 4);

    let (a, b): (SliceCursor<'_, i32>, SliceCursor<'_, i32>) =
        mismatch_bounded(first1, last1, first2, last2).into();
    assert_eq!((a.index(), b.index()), (2, 2));
}

#[test]
fn predicate_forms_use_custom_equivalence() {
    let words = ["Apple", "banana", "CHERRY"];
    let lower = ["apple", "banana", "cherry"];
    let (first1, last1) = bounds(&words);
    let (first2, last2) = bounds(&lower);

    let ci = |a: &&str, b: &&str| a.eq_ignore_ascii_case(b);
    assert!(equal_by(first1, last1, first2, ci));
    assert!(equal_bounded_by(first1, last1, first2, last2, ci));
    assert_eq!(mismatch_by(first1, last1, first2, ci).first, last1);
    assert!(!equal(first1, last1, first2));
}

#[test]
fn mixed_element_types() {
    let bytes: [u8; 3] = [1, 2, 3];
    let wide: [u32; 3] = [1, 2, 3];
    let (first1, last1) = bounds(&bytes);
    let (first2, last2) = bounds(&wide);
    assert!(equal_bounded_by(first1, last1, first2, last2, |a, b| u32::from(*a) == *b));
}

// ============================================================================
// SEARCH
// ============================================================================

#[test]
fn search_12345() {
    let hay = [1, 2, 3, 4, 5];
    let (first, last) = bounds(&hay);

    let (n_first, n_last) = bounds(&[3, 4]);
    assert_eq!(search(first, last, n_first, n_last).index(), 2);

    let (n_first, n_last) = bounds(&[9]);
    assert_eq!(search(first, last, n_first, n_last), last);

    let longer = [1, 2, 3, 4, 5, 6];
    let (n_first, n_last) = bounds(&longer);
    assert_eq!(search(first, last, n_first, n_last), last);
}

#[test]
fn search_by_case_insensitive() {
    let text = *b"Hello World";
    let pattern = *b"WORLD";
    let (first1, last1) = bounds(&text);
    let (first2, last2) = bounds(&pattern);
    let found = search_by(first1, last1, first2, last2, |h: &u8, n: &u8| {
        h.eq_ignore_ascii_case(n)
    });
    assert_eq!(found.index(), 6);
}

#[test]
fn search_n_7s() {
    let data = [7, 7, 1, 7, 7, 7, 2];
    let (first, last) = bounds(&data);
    assert_eq!(search_n(first, last, 3, &7).index(), 3);

    // Three consecutive values within 1 of 7
    let near = search_n_by(first, last, 3, 7, |x: &i32, v: &i32| (x - v).abs() <= 1);
    assert_eq!(near.index(), 3);
}

#[test]
fn search_n_restarts_after_mismatch() {
    // The failed run 5,5 is followed by 5,5,5; the answer is the start of the
    // second run, not some position inside the first.
    let data = [5, 5, 0, 5, 5, 5];
    let (first, last) = bounds(&data);
    assert_eq!(search_n(first, last, 3, &5).index(), 3);
}

#[test]
fn find_first_of_vowels() {
    let word = *b"rhythm and blues";
    let vowels = *b"aeiou";
    let (first1, last1) = bounds(&word);
    let (first2, last2) = bounds(&vowels);
    assert_eq!(find_first_of(first1, last1, first2, last2).index(), 7);

    let upper = *b"AEIOU";
    let (u_first, u_last) = bounds(&upper);
    let found = find_first_of_by(first1, last1, u_first, u_last, |c: &u8, v: &u8| {
        c.to_ascii_uppercase() == *v
    });
    assert_eq!(found.index(), 7);
}

// ============================================================================
// FOLDS
// ============================================================================

#[test]
fn accumulate_1234() {
    let data = [1, 2, 3, 4];
    let (first, last) = bounds(&data);
    assert_eq!(accumulate(first, last, 0), 10);
    assert_eq!(accumulate_by(first, last, 1, |acc: i32, x: &i32| acc * x), 24);
}

#[test]
fn inner_product_123_456() {
    let a = [1, 2, 3];
    let b = [4, 5, 6];
    let (first1, last1) = bounds(&a);
    let (first2, _) = bounds(&b);
    assert_eq!(inner_product(first1, last1, first2, 0), 32);

    // Swap the roles of + and *: (1+4) * (2+5) * (3+6)
    let swapped = inner_product_by(
        first1,
        last1,
        first2,
        1,
        |acc: i32, s: i32| acc * s,
        |x: &i32, y: &i32| x + y,
    );
    assert_eq!(swapped, 315);
}
