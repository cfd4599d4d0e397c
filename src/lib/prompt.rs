//! Confirmation prompt used by interactive syncs.
//!
//! The sync service only sees the [`Confirm`] trait, so the terminal can be
//! swapped for a closure in tests or embedding code.

use std::io::{self, BufRead, Write};

#[cfg(feature = "tracing")]
use tracing::trace;

/// Asks the user to approve a change.
pub trait Confirm {
  fn confirm(&mut self, message: &str) -> io::Result<bool>;
}

impl<F> Confirm for F
where
  F: FnMut(&str) -> io::Result<bool>,
{
  fn confirm(&mut self, message: &str) -> io::Result<bool> {
    self(message)
  }
}

/// Line-based yes/no prompt over any reader and writer.
///
/// Only `y` or `yes` (any case) approves. An empty answer or end of input
/// declines.
pub struct TerminalPrompt<R, W> {
  input: R,
  output: W,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
  pub fn new(input: R, output: W) -> Self {
    Self { input, output }
  }
}

impl TerminalPrompt<io::StdinLock<'static>, io::Stdout> {
  pub fn stdio() -> Self {
    Self::new(io::stdin().lock(), io::stdout())
  }
}

impl<R: BufRead, W: Write> Confirm for TerminalPrompt<R, W> {
  fn confirm(&mut self, message: &str) -> io::Result<bool> {
    write!(self.output, "{} [y/N] ", message)?;
    self.output.flush()?;

    let mut answer = String::new();
    self.input.read_line(&mut answer)?;

    #[cfg(feature = "tracing")]
    trace!("Prompt answer: {:?}", answer);

    let answer = answer.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
  }
}
