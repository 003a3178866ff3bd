// crates/caesar-core/src/cipher.rs

use std::fmt;

use crate::alphabet::{normalize_shift, ALPHABET_SIZE};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encrypt => f.write_str("encrypt"),
            Direction::Decrypt => f.write_str("decrypt"),
        }
    }
}

/// Rotate every ASCII letter of `text` within its own case.
///
/// `shift` may be any integer; it is folded into `0..26` first. Decrypting
/// rotates by `26 - shift`. All other characters are copied through, so the
/// output has exactly as many chars as the input.
pub fn shift_text(text: &str, shift: i64, direction: Direction) -> String {
    let s = normalize_shift(shift);
    let s = match direction {
        Direction::Encrypt => s,
        Direction::Decrypt => (ALPHABET_SIZE as u8 - s) % ALPHABET_SIZE as u8,
    };

    text.chars().map(|c| rotate_char(c, s)).collect()
}

#[inline]
pub fn encrypt(text: &str, shift: i64) -> String {
    shift_text(text, shift, Direction::Encrypt)
}

#[inline]
pub fn decrypt(text: &str, shift: i64) -> String {
    shift_text(text, shift, Direction::Decrypt)
}

#[inline]
fn rotate_char(c: char, shift: u8) -> char {
    if !c.is_ascii_alphabetic() {
        return c;
    }
    let base = if c.is_ascii_lowercase() { b'a' } else { b'A' };
    (((c as u8 - base + shift) % ALPHABET_SIZE as u8) + base) as char
}
