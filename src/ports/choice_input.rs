//! Choice Input Port - Interface for delivering selection events.

use thiserror::Error;

use crate::domain::flow::Question;

/// Errors that can occur while reading a selection.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("input stream closed before a choice was made")]
    Closed,

    #[error("IO error: {0}")]
    Io(String),
}

/// Port for obtaining the user's choice for the question being shown.
///
/// Implementations return a 0-based index into the question's choices.
/// Malformed user input (typos, out-of-range numbers) is the adapter's
/// problem to re-prompt on; the returned index is expected to be valid.
pub trait ChoiceInput: Send + Sync {
    /// Blocks until a choice is selected for the given question.
    fn select(&self, question_index: usize, question: &Question) -> Result<usize, InputError>;
}
