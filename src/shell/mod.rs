//! Interactive console session.
//!
//! Prompts for the three coefficients, prints the roots, and offers to
//! solve another equation. Invalid coefficients are reported and asked for
//! again; they never end the session. Reading and writing go through
//! generic [`BufRead`] and [`Write`] handles so a session can run against
//! stdin/stdout or an in-memory buffer.

use std::io::{BufRead, Write};

use crate::error::{PrecisionError, SessionError};
use crate::format::format_roots;
use crate::input::{validate, validate_leading};
use crate::solver::solve;

/// Question asked after each solved equation.
pub const RETRY_PROMPT: &str = "Do you want to solve another equation? (y/n): ";

/// Result type for console sessions.
pub type SessionResult<T> = std::result::Result<T, SessionError>;

/// An interactive solving session over a reader and a writer.
pub struct Session<R, W> {
    reader: R,
    writer: W,
    solved: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            solved: 0,
        }
    }

    /// Run until the user declines to continue or input ends.
    ///
    /// Returns the number of equations solved.
    pub fn run(&mut self) -> SessionResult<usize> {
        loop {
            if !self.solve_one()? {
                break;
            }
            match self.read_answer(RETRY_PROMPT)? {
                Some(answer) if is_yes(&answer) => continue,
                _ => break,
            }
        }
        self.writer.flush()?;
        Ok(self.solved)
    }

    /// Consume the session and return the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// One round of prompting and solving. Returns false at end of input.
    fn solve_one(&mut self) -> SessionResult<bool> {
        let Some(a) = self.read_coefficient('a', validate_leading)? else {
            return Ok(false);
        };
        let Some(b) = self.read_coefficient('b', validate)? else {
            return Ok(false);
        };
        let Some(c) = self.read_coefficient('c', validate)? else {
            return Ok(false);
        };

        match solve(a, b, c) {
            Ok(result) => {
                for line in format_roots(&result) {
                    writeln!(self.writer, "{}", line)?;
                }
                self.solved += 1;
            }
            Err(e) => writeln!(self.writer, "{}", e)?,
        }
        Ok(true)
    }

    /// Prompt until a coefficient validates. `None` at end of input.
    fn read_coefficient(
        &mut self,
        name: char,
        parse: fn(&str) -> Result<f64, PrecisionError>,
    ) -> SessionResult<Option<f64>> {
        let prompt = format!("Enter coefficient {}: ", name);
        loop {
            let Some(text) = self.read_answer(&prompt)? else {
                return Ok(None);
            };
            match parse(&text) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => writeln!(self.writer, "{}", e)?,
            }
        }
    }

    /// Print a prompt and read one line. `None` at end of input.
    fn read_answer(&mut self, prompt: &str) -> SessionResult<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            writeln!(self.writer)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

fn is_yes(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

/// Run a session to completion, returning the number of equations solved.
pub fn run_session<R: BufRead, W: Write>(reader: R, writer: W) -> SessionResult<usize> {
    Session::new(reader, writer).run()
}

/// Run a session on the process's stdin and stdout.
pub fn run_console() -> SessionResult<usize> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_session(stdin.lock(), stdout.lock())
}
