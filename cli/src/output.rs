//! Styled terminal output.
//!
//! All user-facing text goes through [`Output`], which owns one writer for
//! results and one for diagnostics. The binary wires these to the terminal;
//! tests use byte buffers.

use std::fmt::Display;
use std::io::Write;

use console::{Term, style};

pub struct Output<W, E> {
    out: W,
    err: E,
}

impl Output<Term, Term> {
    /// Results on stdout, errors on stderr.
    pub fn stdio() -> Self {
        Self::new(Term::stdout(), Term::stderr())
    }
}

impl<W: Write, E: Write> Output<W, E> {
    pub fn new(out: W, err: E) -> Self {
        Self { out, err }
    }

    /// Print an error message with a red X to the error stream.
    pub fn error(&mut self, message: impl Display) {
        drop(writeln!(
            self.err,
            "{} {}",
            style("✗").for_stderr().red().bold(),
            message
        ));
    }

    /// Print a warning message with a yellow warning sign.
    pub fn warning(&mut self, message: impl Display) {
        drop(writeln!(
            self.out,
            "{} {}",
            style("⚠").yellow().bold(),
            message
        ));
    }

    /// Print an info message with a blue info icon.
    pub fn info(&mut self, message: impl Display) {
        drop(writeln!(self.out, "{} {}", style("ℹ").blue().bold(), message));
    }

    /// Print a plain message without any prefix.
    pub fn print(&mut self, message: impl Display) {
        drop(writeln!(self.out, "{message}"));
    }

    pub fn newline(&mut self) {
        drop(writeln!(self.out));
    }

    /// Write pre-rendered table lines in order.
    pub fn table(&mut self, lines: &[String]) {
        for line in lines {
            drop(writeln!(self.out, "{line}"));
        }
    }

    pub fn flush(&mut self) {
        drop(self.out.flush());
        drop(self.err.flush());
    }

    /// Give back both writers.
    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }
}
