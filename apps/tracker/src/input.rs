//! Input channel: raw console reads plus the validating wrapper

use std::io::{self, BufRead, Write};
use std::num::ParseIntError;
use std::sync::Arc;

use thiserror::Error;

use crate::output::Output;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("Not a valid integer: {0}")]
    Parse(#[from] ParseIntError),
}

pub type InputResult<T> = Result<T, InputError>;

/// Source of user-provided values
///
/// `ask_int` guarantees nothing beyond syntactic parsing; range checks stay
/// with the caller.
pub trait Input: Send {
    fn ask_str(&mut self, prompt: &str) -> InputResult<String>;

    fn ask_int(&mut self, prompt: &str) -> InputResult<i32> {
        Ok(self.ask_str(prompt)?.trim().parse()?)
    }
}

/// Console implementation reading lines from stdin
pub struct ConsoleInput {
    stdin: io::Stdin,
}

impl ConsoleInput {
    pub fn new() -> Self {
        Self { stdin: io::stdin() }
    }
}

impl Input for ConsoleInput {
    fn ask_str(&mut self, prompt: &str) -> InputResult<String> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        let read = self.stdin.lock().read_line(&mut line)?;
        if read == 0 {
            return Err(InputError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed",
            )));
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Wrapper that retries `ask_int` until the answer parses as an integer
///
/// Only syntactic validity is enforced here; a parse failure prints an error
/// through the output channel and re-prompts. Io errors propagate.
pub struct ValidatedInput<I: Input> {
    out: Arc<dyn Output>,
    inner: I,
}

impl<I: Input> ValidatedInput<I> {
    pub fn new(out: Arc<dyn Output>, inner: I) -> Self {
        Self { out, inner }
    }
}

impl<I: Input> Input for ValidatedInput<I> {
    fn ask_str(&mut self, prompt: &str) -> InputResult<String> {
        self.inner.ask_str(prompt)
    }

    fn ask_int(&mut self, prompt: &str) -> InputResult<i32> {
        loop {
            match self.inner.ask_int(prompt) {
                Ok(value) => return Ok(value),
                Err(InputError::Parse(_)) => {
                    self.out.println("Wrong input, you can select...");
                }
                Err(err) => return Err(err),
            }
        }
    }
}

/// Pre-scripted answer source for tests
#[cfg(test)]
pub struct StubInput {
    answers: Vec<String>,
    position: usize,
}

#[cfg(test)]
impl StubInput {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|s| s.to_string()).collect(),
            position: 0,
        }
    }
}

#[cfg(test)]
impl Input for StubInput {
    fn ask_str(&mut self, _prompt: &str) -> InputResult<String> {
        let answer = self.answers[self.position].clone();
        self.position += 1;
        Ok(answer)
    }
}
