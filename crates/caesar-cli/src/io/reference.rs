// crates/caesar-cli/src/io/reference.rs

use std::path::Path;

use anyhow::{Context, Result};
use caesar_core::dist::reference::{parse_reference, ENGLISH};
use caesar_core::LetterDist;

/// Load a reference distribution file, or fall back to the built-in English table.
pub fn load_reference(path: Option<&Path>) -> Result<LetterDist> {
    let Some(path) = path else {
        tracing::debug!("using built-in English reference");
        return Ok(ENGLISH);
    };

    let src = std::fs::read_to_string(path)
        .with_context(|| format!("read reference {}", path.display()))?;
    let dist = parse_reference(&src).with_context(|| format!("parse reference {}", path.display()))?;
    tracing::info!(path = %path.display(), "reference distribution loaded");
    Ok(dist)
}
