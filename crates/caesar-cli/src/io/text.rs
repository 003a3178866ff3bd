// crates/caesar-cli/src/io/text.rs

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

/// Longest text accepted from any source, in chars. Longer input is cut.
pub const MAX_TEXT_LEN: usize = 99_999;

/// Where a command gets its text from: exactly one of `--text` / `--in`.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct TextSource {
    /// Text given directly on the command line
    #[arg(long)]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(long = "in", value_name = "PATH")]
    pub r#in: Option<PathBuf>,
}

impl TextSource {
    pub fn load(&self) -> Result<String> {
        match (&self.text, &self.r#in) {
            (Some(t), _) => Ok(bound_text(t.clone())),
            (None, Some(p)) => read_text_file(p),
            (None, None) => anyhow::bail!("no text given (use --text or --in)"),
        }
    }
}

/// Read a text file. Invalid UTF-8 is replaced rather than rejected.
pub fn read_text_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("read text {}", path.display()))?;
    let text = String::from_utf8_lossy(&bytes).into_owned();
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "text loaded");
    Ok(bound_text(text))
}

/// Truncate to [`MAX_TEXT_LEN`] chars.
pub fn bound_text(mut text: String) -> String {
    if let Some((idx, _)) = text.char_indices().nth(MAX_TEXT_LEN) {
        tracing::warn!(limit = MAX_TEXT_LEN, "text truncated");
        text.truncate(idx);
    }
    text
}
