use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{bail, Result};
use log::warn;

use scheduler::{Process, ProcessSpec};

/// Reads numbers from a line-based input, asking again until the
/// answer is a valid number.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Asks `message` until the answer parses and is at least `min`.
    pub fn number<T>(&mut self, message: &str, min: T) -> Result<T>
    where
        T: FromStr + PartialOrd + Display,
    {
        loop {
            write!(self.output, "{message}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("input closed while waiting for: {}", message.trim_end());
            }

            match line.trim().parse::<T>() {
                Ok(value) if value >= min => return Ok(value),
                _ => {
                    warn!("rejected input {:?}", line.trim());
                    writeln!(self.output, "Invalid input! Enter an integer >= {min}.")?;
                }
            }
        }
    }

    /// Asks for the number of processes, then for each process in turn.
    pub fn processes(&mut self) -> Result<Vec<Process>> {
        let count: usize = self.number("Enter number of processes: ", 1)?;

        let mut specs = Vec::with_capacity(count);
        for pid in 1..=count {
            let arrival = self.number(&format!("Enter arrival time for process {pid}: "), 0)?;
            let burst = self.number(&format!("Enter burst time for process {pid}: "), 1)?;
            let priority = self.number(
                &format!("Enter priority for process {pid} (lower number = higher priority): "),
                0,
            )?;
            specs.push(ProcessSpec::new(arrival, burst, priority));
        }
        Ok(Process::table(specs))
    }

    pub fn quantum(&mut self) -> Result<usize> {
        self.number("Enter time quantum for Round Robin: ", 1)
    }
}
