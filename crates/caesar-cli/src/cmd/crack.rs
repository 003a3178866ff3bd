// crates/caesar-cli/src/cmd/crack.rs

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use caesar_core::{crack, Decryption, LetterDist, Metric, TOP_N};

use crate::io::reference::load_reference;
use crate::io::text::TextSource;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum MetricArg {
    /// Chi-squared against the reference (skips letters the reference never uses)
    ChiSquared,
    /// Euclidean (L2) distance
    Euclidean,
    /// One minus cosine similarity
    Cosine,
    /// Run all three, one table each
    All,
}

impl MetricArg {
    fn metrics(self) -> Vec<Metric> {
        match self {
            MetricArg::ChiSquared => vec![Metric::ChiSquared],
            MetricArg::Euclidean => vec![Metric::Euclidean],
            MetricArg::Cosine => vec![Metric::Cosine],
            MetricArg::All => Metric::ALL.to_vec(),
        }
    }
}

#[derive(Args, Debug)]
pub struct CrackArgs {
    #[command(flatten)]
    pub source: TextSource,

    /// Distance metric used to rank shifts
    #[arg(long, value_enum, default_value_t = MetricArg::ChiSquared)]
    pub metric: MetricArg,

    /// Reference letter distribution (26 whitespace-separated floats, a..z).
    /// If omitted, uses the built-in English table.
    #[arg(long, env = "CAESAR_REFERENCE")]
    pub reference: Option<PathBuf>,
}

pub fn run(args: CrackArgs) -> anyhow::Result<()> {
    let reference = load_reference(args.reference.as_deref())?;
    let cipher = args.source.load()?;

    let mut stdout = std::io::stdout().lock();
    for (i, metric) in args.metric.metrics().into_iter().enumerate() {
        if i > 0 {
            writeln!(stdout)?;
        }
        write_ranking(&mut stdout, &cipher, &reference, metric)?;
    }
    Ok(())
}

/// Rank `cipher` and print the top candidates with their decryptions.
pub fn write_ranking<W: Write>(
    w: &mut W,
    cipher: &str,
    reference: &LetterDist,
    metric: Metric,
) -> anyhow::Result<()> {
    let ranked = crack(cipher, reference, metric);
    writeln!(
        w,
        "Top {TOP_N} most likely encryption shifts using {metric} distance:"
    )?;
    for d in &ranked {
        write_candidate(w, d)?;
    }
    Ok(())
}

fn write_candidate<W: Write>(w: &mut W, d: &Decryption) -> anyhow::Result<()> {
    match &d.plaintext {
        Some(plain) => {
            writeln!(
                w,
                "{}. Encryption Shift = {}, Distance = {:.6}",
                d.rank, d.candidate.shift, d.candidate.distance
            )?;
            writeln!(w, "   Decrypted: {plain}")?;
        }
        None => writeln!(w, "{}. (no candidate)", d.rank)?,
    }
    Ok(())
}
