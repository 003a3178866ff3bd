// crates/caesar-core/src/dist/histogram.rs

use crate::alphabet::{letter_index, ALPHABET_SIZE};
use crate::dist::LetterDist;

/// Raw per-letter counts plus the number of letters seen.
pub fn letter_counts(text: &str) -> ([u64; ALPHABET_SIZE], u64) {
    let mut counts = [0u64; ALPHABET_SIZE];
    let mut total = 0u64;
    for i in text.chars().filter_map(letter_index) {
        counts[i] += 1;
        total += 1;
    }
    (counts, total)
}

/// Normalized letter frequencies of `text`.
///
/// - ASCII letters only, case-folded.
/// - Everything else is skipped silently.
/// - No letters at all gives [`LetterDist::ZERO`].
pub fn build_histogram(text: &str) -> LetterDist {
    let (counts, total) = letter_counts(text);
    if total == 0 {
        return LetterDist::ZERO;
    }

    let mut h = [0.0; ALPHABET_SIZE];
    for (slot, &c) in h.iter_mut().zip(counts.iter()) {
        *slot = (c as f64) / (total as f64);
    }
    LetterDist(h)
}
