// crates/caesar-core/src/dist/mod.rs

pub mod histogram;
pub mod reference;

use crate::alphabet::{index_letter, ALPHABET_SIZE};

/// Relative letter frequencies, indexed a=0..z=25.
///
/// Used both for observed text histograms (sum 1.0, or all-zero when the
/// text had no letters) and for reference language models.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LetterDist(pub [f64; ALPHABET_SIZE]);

impl LetterDist {
    pub const ZERO: LetterDist = LetterDist([0.0; ALPHABET_SIZE]);

    #[inline]
    pub fn get(&self, i: usize) -> f64 {
        self.0[i]
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&v| v == 0.0)
    }

    /// Rotate forward by `shift`: the value at letter `i` moves to `(i + shift) mod 26`.
    ///
    /// Applied to a plaintext model this yields the letter distribution expected
    /// from ciphertext encrypted with `shift`.
    pub fn rotated(&self, shift: u8) -> LetterDist {
        let s = shift as usize % ALPHABET_SIZE;
        let mut out = [0.0; ALPHABET_SIZE];
        for (i, &v) in self.0.iter().enumerate() {
            out[(i + s) % ALPHABET_SIZE] = v;
        }
        LetterDist(out)
    }

    /// (letter, value) pairs in alphabet order.
    pub fn letters(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        self.0.iter().enumerate().map(|(i, &v)| (index_letter(i), v))
    }
}
