//! Single-question prompt shell used by the demo binaries.

use crate::core::errors::RegistryError;
use crate::patterns::pizza::PizzaStore;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Prompt shown before reading the pizza order
pub const PIZZA_PROMPT: &str = "What pizza would you like? ";

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("No input received")]
    EmptyInput,

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

pub type Result<T> = std::result::Result<T, ShellError>;

/// Write `prompt`, then read and trim one line
pub fn prompt_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(ShellError::EmptyInput);
    }

    let answer = line.trim();
    if answer.is_empty() {
        return Err(ShellError::EmptyInput);
    }
    Ok(answer.to_string())
}

/// Ask for a pizza, order it from `store` and print each step
pub fn run_pizza_order<S, R, W>(store: &S, input: &mut R, output: &mut W) -> Result<()>
where
    S: PizzaStore + ?Sized,
    R: BufRead,
    W: Write,
{
    let kind = prompt_line(input, output, PIZZA_PROMPT)?;
    for step in store.order_pizza(&kind)? {
        writeln!(output, "{}", step)?;
    }
    Ok(())
}
