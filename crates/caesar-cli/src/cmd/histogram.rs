// crates/caesar-cli/src/cmd/histogram.rs

use std::io::Write;

use clap::Args;
use caesar_core::{build_histogram, LetterDist};

use crate::io::text::TextSource;

#[derive(Args, Debug)]
pub struct HistogramArgs {
    #[command(flatten)]
    pub source: TextSource,
}

pub fn run(args: HistogramArgs) -> anyhow::Result<()> {
    let text = args.source.load()?;
    let h = build_histogram(&text);
    write_histogram(&mut std::io::stdout().lock(), &h)
}

/// `a: 8.17%` per letter, a..z.
pub fn write_histogram<W: Write>(w: &mut W, h: &LetterDist) -> anyhow::Result<()> {
    writeln!(w, "Letter Frequency Distribution:")?;
    for (c, v) in h.letters() {
        writeln!(w, "{c}: {:.2}%", v * 100.0)?;
    }
    Ok(())
}
