// crates/caesar-core/src/validate.rs

use crate::alphabet::index_letter;
use crate::dist::LetterDist;
use crate::error::{CaesarError, Result};

/// Sanity checks for a reference distribution.
///
/// The ranking code assumes finite, non-negative entries and at least one
/// positive value; anything else would make every shift score the same.
pub fn validate_reference(d: &LetterDist) -> Result<()> {
    for (i, &v) in d.0.iter().enumerate() {
        if !v.is_finite() {
            return Err(CaesarError::Validation(format!(
                "letter {} is not finite ({v})",
                index_letter(i)
            )));
        }
        if v < 0.0 {
            return Err(CaesarError::Validation(format!(
                "letter {} is negative ({v})",
                index_letter(i)
            )));
        }
    }

    if d.is_zero() {
        return Err(CaesarError::Validation(
            "distribution is all zero".into(),
        ));
    }

    Ok(())
}
