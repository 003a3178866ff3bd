// crates/caesar-core/src/crack.rs

use crate::cipher::decrypt;
use crate::dist::histogram::build_histogram;
use crate::dist::LetterDist;
use crate::metric::Metric;
use crate::rank::{rank_shifts, Candidate};

/// One ranked guess at the shift used to produce a ciphertext.
#[derive(Clone, Debug, PartialEq)]
pub struct Decryption {
    /// 1-based position in the ranking.
    pub rank: usize,
    pub candidate: Candidate,
    /// `None` for an unfilled ranking slot.
    pub plaintext: Option<String>,
}

/// Rank all shifts for `ciphertext` under `metric` and decrypt the text with
/// each candidate, best first.
pub fn crack(ciphertext: &str, reference: &LetterDist, metric: Metric) -> Vec<Decryption> {
    let histogram = build_histogram(ciphertext);
    if histogram.is_zero() {
        tracing::debug!(%metric, "ciphertext has no letters; ranking is degenerate");
    }

    let top = rank_shifts(&histogram, reference, metric);
    if let Some(best) = top.best() {
        tracing::debug!(%metric, shift = best.shift, distance = best.distance, "best shift");
    }

    top.iter()
        .enumerate()
        .map(|(i, c)| Decryption {
            rank: i + 1,
            candidate: *c,
            plaintext: c.shift().map(|s| decrypt(ciphertext, s as i64)),
        })
        .collect()
}
