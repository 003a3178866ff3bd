// crates/caesar-cli/src/main.rs

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "caesar-cli")]
#[command(about = "Caesar shift cipher tool with frequency-analysis cracking", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encrypt text with a known shift
    Encrypt(cmd::shift::ShiftArgs),

    /// Decrypt text with a known shift
    Decrypt(cmd::shift::ShiftArgs),

    /// Show the letter frequency distribution of a text
    Histogram(cmd::histogram::HistogramArgs),

    /// Rank the most likely shifts of a ciphertext against a reference distribution
    Crack(cmd::crack::CrackArgs),

    /// Interactive numbered menu over stdin/stdout
    Menu(cmd::menu::MenuArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Encrypt(args) => cmd::shift::run(args, caesar_core::Direction::Encrypt),
        Commands::Decrypt(args) => cmd::shift::run(args, caesar_core::Direction::Decrypt),
        Commands::Histogram(args) => cmd::histogram::run(args),
        Commands::Crack(args) => cmd::crack::run(args),
        Commands::Menu(args) => cmd::menu::run(args),
    }
}
