use std::io::{BufRead, Write};
use tracing::debug;

use super::engine::Algorithm;
use crate::errors::{SearchError, SearchResult};

pub const PROMPT: &str = "Choice of search method ([l]inear, [b]inary, [r]ecursiveBinary)? ";
pub const INCORRECT_CHOICE: &str = "Incorrect choice";

/// Asks for a search method until a valid one is read.
///
/// Each non-whitespace character of `input` is one answer, so `xl` is an
/// incorrect choice followed by `l`. Every rejected answer writes
/// [`INCORRECT_CHOICE`] to `err` and prompts again on `out`.
pub fn prompt_for_algorithm<R, W, E>(
    mut input: R,
    mut out: W,
    mut err: E,
) -> SearchResult<Algorithm>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut line = String::new();
    let mut pending: Vec<char> = Vec::new();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        // Refill from the next line that has any answer on it
        let choice = loop {
            match pending.pop() {
                Some(choice) => break choice,
                None => {
                    line.clear();
                    if input.read_line(&mut line)? == 0 {
                        return Err(SearchError::SelectionAborted);
                    }
                    pending = line.chars().filter(|c| !c.is_whitespace()).rev().collect();
                }
            }
        };

        match Algorithm::from_choice(choice) {
            Some(algorithm) => {
                debug!("Selected {} search", algorithm);
                return Ok(algorithm);
            }
            None => writeln!(err, "{}", INCORRECT_CHOICE)?,
        }
    }
}
