//! Interactive yes/no confirmation.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

/// Ask `question` on stdout and read the answer from stdin.
pub fn confirm(question: &str) -> Result<bool> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    ask(question, &mut stdin.lock(), &mut stdout.lock())
}

/// Anything but an explicit yes declines, including end of input.
pub fn ask<R: BufRead, W: Write>(question: &str, input: &mut R, output: &mut W) -> Result<bool> {
    write!(output, "{question} [y/N] ")?;
    output.flush()?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
