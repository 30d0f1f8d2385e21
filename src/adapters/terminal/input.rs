//! Stdin Choice Input Adapter
//!
//! Reads a 1-based selection number from standard input. User typos are
//! re-prompted here and never reach the session as errors.

use std::io::{BufRead, Write};

use crate::domain::flow::Question;
use crate::ports::{ChoiceInput, InputError};

/// Choice input reading line-based selections from stdin.
#[derive(Debug, Default)]
pub struct StdinChoiceInput;

impl StdinChoiceInput {
    pub fn new() -> Self {
        Self
    }

    fn prompt(&self, choice_count: usize) -> Result<(), InputError> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        write!(handle, "Pick 1-{}: ", choice_count).map_err(|e| InputError::Io(e.to_string()))?;
        handle.flush().map_err(|e| InputError::Io(e.to_string()))
    }
}

impl ChoiceInput for StdinChoiceInput {
    fn select(&self, _question_index: usize, question: &Question) -> Result<usize, InputError> {
        let choice_count = question.choices.len();
        let stdin = std::io::stdin();

        loop {
            self.prompt(choice_count)?;

            let mut line = String::new();
            let read = stdin
                .lock()
                .read_line(&mut line)
                .map_err(|e| InputError::Io(e.to_string()))?;
            if read == 0 {
                return Err(InputError::Closed);
            }

            match line.trim().parse::<usize>() {
                Ok(number) if (1..=choice_count).contains(&number) => return Ok(number - 1),
                _ => {
                    tracing::trace!(input = line.trim(), "unusable selection, re-prompting");
                }
            }
        }
    }
}
