//! Line-based prompting over any reader/writer pair

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Asks questions on `output` and reads answers from `input`
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Where prompts and messages are written
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print `prompt` and read one line without its line ending.
    ///
    /// Returns `None` at end of input.
    pub fn line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush prompt")?;

        let mut answer = String::new();
        let read = self
            .input
            .read_line(&mut answer)
            .context("Failed to read input")?;

        if read == 0 {
            return Ok(None);
        }

        let trimmed = answer.trim_end_matches(['\r', '\n']).len();
        answer.truncate(trimmed);
        Ok(Some(answer))
    }

    /// Ask until an integer in `min..=max` is entered.
    ///
    /// Returns `None` at end of input.
    pub fn number(&mut self, min: usize, max: usize, prompt: &str) -> Result<Option<usize>> {
        loop {
            let Some(answer) = self.line(prompt)? else {
                return Ok(None);
            };

            match answer.trim().parse::<usize>() {
                Ok(value) if (min..=max).contains(&value) => return Ok(Some(value)),
                _ => {
                    writeln!(self.output)?;
                    writeln!(self.output, "An integer between {} and {} was expected.", min, max)?;
                    writeln!(self.output)?;
                }
            }
        }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
