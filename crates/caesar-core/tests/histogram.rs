// crates/caesar-core/tests/histogram.rs

use caesar_core::build_histogram;
use caesar_core::dist::histogram::letter_counts;
use caesar_core::LetterDist;

const SAMPLE: &str = include_str!("../../../text/sample.txt");

#[test]
fn histogram_sums_to_one() {
    for text in ["a", "Hello, World!", "zzz top", SAMPLE] {
        let h = build_histogram(text);
        assert!((h.sum() - 1.0).abs() < 1e-9, "text={text:?} sum={}", h.sum());
    }
}

#[test]
fn histogram_is_case_insensitive() {
    assert_eq!(build_histogram("abc"), build_histogram("ABC"));
    assert_eq!(build_histogram("The Quick"), build_histogram("tHE qUICK"));
}

#[test]
fn histogram_ignores_non_letters() {
    assert_eq!(build_histogram("a1b2c3!"), build_histogram("abc"));
    assert_eq!(build_histogram("  a\tb\nc  "), build_histogram("abc"));
    // Non-ASCII letters are not part of the alphabet.
    assert_eq!(build_histogram("abcéß"), build_histogram("abc"));
}

#[test]
fn histogram_without_letters_is_all_zero() {
    assert_eq!(build_histogram(""), LetterDist::ZERO);
    assert_eq!(build_histogram("1234 !?"), LetterDist::ZERO);
    assert!(build_histogram("...").is_zero());
}

#[test]
fn histogram_values_match_counts() {
    let h = build_histogram("aab");
    assert!((h.get(0) - 2.0 / 3.0).abs() < 1e-12);
    assert!((h.get(1) - 1.0 / 3.0).abs() < 1e-12);
    assert_eq!(h.get(2), 0.0);

    let (counts, total) = letter_counts("Zebra!");
    assert_eq!(total, 5);
    assert_eq!(counts[25], 1);
    assert_eq!(counts[0], 1);
}
