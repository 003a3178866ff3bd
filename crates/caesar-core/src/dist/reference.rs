// crates/caesar-core/src/dist/reference.rs

use crate::alphabet::{index_letter, ALPHABET_SIZE};
use crate::dist::LetterDist;
use crate::error::{CaesarError, Result};
use crate::validate::validate_reference;

/// Standard English letter frequencies (a..z).
pub const ENGLISH: LetterDist = LetterDist([
    0.08167, 0.01492, 0.02782, 0.04253, 0.12702, 0.02228, 0.02015, // a-g
    0.06094, 0.06966, 0.00153, 0.00772, 0.04025, 0.02406, 0.06749, // h-n
    0.07507, 0.01929, 0.00095, 0.05987, 0.06327, 0.09056, 0.02758, // o-u
    0.00978, 0.02360, 0.00150, 0.01974, 0.00074, // v-z
]);

/// Parse a reference distribution: 26 whitespace-separated floats, a..z.
///
/// Only the first 26 tokens are read; anything after them is ignored.
/// The result is checked with [`validate_reference`].
pub fn parse_reference(src: &str) -> Result<LetterDist> {
    let mut tokens = src.split_whitespace();
    let mut d = [0.0; ALPHABET_SIZE];

    for (i, slot) in d.iter_mut().enumerate() {
        let tok = tokens.next().ok_or_else(|| {
            CaesarError::Reference(format!(
                "reading distribution for letter {}: unexpected end of input",
                index_letter(i)
            ))
        })?;
        *slot = tok.parse::<f64>().map_err(|e| {
            CaesarError::Reference(format!(
                "reading distribution for letter {}: {tok:?}: {e}",
                index_letter(i)
            ))
        })?;
    }

    let dist = LetterDist(d);
    validate_reference(&dist)?;

    let sum = dist.sum();
    if (sum - 1.0).abs() > 1e-2 {
        tracing::warn!(sum, "reference distribution does not sum to 1.0");
    }
    Ok(dist)
}
