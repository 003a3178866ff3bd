// crates/caesar-core/src/alphabet.rs

/// Number of letters in the (ASCII, case-folded) alphabet.
pub const ALPHABET_SIZE: usize = 26;

/// Index of an ASCII letter in `0..26`, case-insensitive.
/// Anything else (digits, punctuation, non-ASCII letters) has no index.
#[inline]
pub fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_alphabetic() {
        Some((c.to_ascii_lowercase() as u8 - b'a') as usize)
    } else {
        None
    }
}

/// Lowercase letter for an index in `0..26`.
#[inline]
pub fn index_letter(i: usize) -> char {
    debug_assert!(i < ALPHABET_SIZE);
    (b'a' + (i % ALPHABET_SIZE) as u8) as char
}

/// Fold any integer shift into `0..26`: `((shift % 26) + 26) % 26`.
#[inline]
pub fn normalize_shift(shift: i64) -> u8 {
    shift.rem_euclid(ALPHABET_SIZE as i64) as u8
}
