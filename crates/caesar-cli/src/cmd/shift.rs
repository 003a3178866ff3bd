// crates/caesar-cli/src/cmd/shift.rs

use std::io::Write;

use clap::Args;
use caesar_core::{shift_text, Direction};

use crate::io::text::TextSource;

#[derive(Args, Debug)]
pub struct ShiftArgs {
    #[command(flatten)]
    pub source: TextSource,

    /// Shift amount. Any integer; folded into 0..=25 (e.g. 26 == 0, -1 == 25).
    #[arg(long, allow_hyphen_values = true)]
    pub shift: i64,
}

pub fn run(args: ShiftArgs, direction: Direction) -> anyhow::Result<()> {
    let text = args.source.load()?;
    let out = shift_text(&text, args.shift, direction);
    tracing::debug!(%direction, shift = args.shift, chars = out.chars().count(), "shifted");

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{out}")?;
    Ok(())
}
