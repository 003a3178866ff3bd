// crates/caesar-cli/src/cmd/menu.rs

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use caesar_core::{build_histogram, decrypt, encrypt, LetterDist, Metric};

use crate::cmd::crack::write_ranking;
use crate::cmd::histogram::write_histogram;
use crate::io::reference::load_reference;
use crate::io::text::{bound_text, read_text_file, MAX_TEXT_LEN};

#[derive(Args, Debug)]
pub struct MenuArgs {
    /// Reference letter distribution (26 whitespace-separated floats, a..z).
    /// If omitted, uses the built-in English table.
    #[arg(long, env = "CAESAR_REFERENCE")]
    pub reference: Option<PathBuf>,
}

pub fn run(args: MenuArgs) -> anyhow::Result<()> {
    let reference = load_reference(args.reference.as_deref())?;
    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    Menu::new(stdin, stdout, &reference).run()
}

/// Numbered menu session. Holds the current working text between choices.
pub struct Menu<'r, R, W> {
    input: R,
    out: W,
    reference: &'r LetterDist,
    text: String,
}

impl<'r, R: BufRead, W: Write> Menu<'r, R, W> {
    pub fn new(input: R, out: W, reference: &'r LetterDist) -> Self {
        Self {
            input,
            out,
            reference,
            text: String::new(),
        }
    }

    /// Loop until `0` or end of input.
    pub fn run(mut self) -> anyhow::Result<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.read_line()? else {
                writeln!(self.out)?;
                break;
            };

            match line.trim().parse::<u32>() {
                Ok(0) => {
                    writeln!(self.out, "Exiting program.")?;
                    break;
                }
                Ok(1) => self.read_keyboard()?,
                Ok(2) => self.read_file()?,
                Ok(3) => self.encrypt()?,
                Ok(4) => self.decrypt()?,
                Ok(5) => self.histogram()?,
                Ok(6) => self.crack(Metric::ChiSquared)?,
                Ok(7) => self.crack(Metric::Euclidean)?,
                Ok(8) => self.crack(Metric::Cosine)?,
                _ => writeln!(self.out, "Invalid choice. Please try again.")?,
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn print_menu(&mut self) -> anyhow::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "========== Caesar Cipher Menu ==========")?;
        writeln!(self.out, "1. Read text from keyboard")?;
        writeln!(self.out, "2. Read text from file")?;
        writeln!(self.out, "3. Encrypt text with a specific shift")?;
        writeln!(self.out, "4. Decrypt text with a known shift")?;
        writeln!(self.out, "5. Display letter frequency distribution")?;
        writeln!(self.out, "6. Break cipher using Chi-squared distance")?;
        writeln!(self.out, "7. Break cipher using Euclidean distance")?;
        writeln!(self.out, "8. Break cipher using Cosine distance")?;
        writeln!(self.out, "0. Exit")?;
        write!(self.out, "Enter your choice: ")?;
        self.out.flush()?;
        Ok(())
    }

    /// One line without its line ending; `None` at end of input.
    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let trimmed = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(trimmed);
        Ok(Some(buf))
    }

    fn prompt(&mut self, msg: &str) -> anyhow::Result<Option<String>> {
        write!(self.out, "{msg}")?;
        self.out.flush()?;
        self.read_line()
    }

    fn prompt_shift(&mut self) -> anyhow::Result<Option<i64>> {
        let Some(line) = self.prompt("Enter shift value (0-25): ")? else {
            return Ok(None);
        };
        match line.trim().parse::<i64>() {
            Ok(s) => Ok(Some(s)),
            Err(_) => {
                writeln!(self.out, "Invalid shift value.")?;
                Ok(None)
            }
        }
    }

    fn require_text(&mut self) -> anyhow::Result<bool> {
        if self.text.is_empty() {
            writeln!(self.out, "Please read a text first.")?;
            return Ok(false);
        }
        Ok(true)
    }

    fn read_keyboard(&mut self) -> anyhow::Result<()> {
        writeln!(self.out, "Enter text (max {MAX_TEXT_LEN} characters):")?;
        self.out.flush()?;
        if let Some(line) = self.read_line()? {
            self.text = bound_text(line);
            writeln!(self.out, "Text read: {}", self.text)?;
        }
        Ok(())
    }

    fn read_file(&mut self) -> anyhow::Result<()> {
        let Some(name) = self.prompt("Enter filename: ")? else {
            return Ok(());
        };
        match read_text_file(Path::new(&name)) {
            Ok(text) => {
                self.text = text;
                writeln!(self.out, "Text read from file:\n{}", self.text)?;
            }
            Err(e) => {
                tracing::warn!(error = %format!("{e:#}"), "text file not loaded");
                writeln!(self.out, "Error opening file {name}")?;
            }
        }
        Ok(())
    }

    fn encrypt(&mut self) -> anyhow::Result<()> {
        if !self.require_text()? {
            return Ok(());
        }
        if let Some(shift) = self.prompt_shift()? {
            let out = encrypt(&self.text, shift);
            writeln!(self.out, "Encrypted text: {out}")?;
        }
        Ok(())
    }

    fn decrypt(&mut self) -> anyhow::Result<()> {
        let Some(cipher) = self.prompt("Enter encrypted text: ")? else {
            return Ok(());
        };
        if let Some(shift) = self.prompt_shift()? {
            let out = decrypt(&bound_text(cipher), shift);
            writeln!(self.out, "Decrypted text: {out}")?;
        }
        Ok(())
    }

    fn histogram(&mut self) -> anyhow::Result<()> {
        if !self.require_text()? {
            return Ok(());
        }
        let h = build_histogram(&self.text);
        write_histogram(&mut self.out, &h)
    }

    fn crack(&mut self, metric: Metric) -> anyhow::Result<()> {
        let Some(cipher) = self.prompt("Enter encrypted text: ")? else {
            return Ok(());
        };
        write_ranking(&mut self.out, &bound_text(cipher), self.reference, metric)
    }
}
