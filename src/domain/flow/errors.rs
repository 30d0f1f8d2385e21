//! Error types for the question-flow domain.

use thiserror::Error;

use super::session::SessionPhase;

/// Errors raised by the traversal session.
///
/// Both variants are integration errors: the fixed catalog guarantees a
/// correctly driven session never produces them, so they fail fast
/// instead of being swallowed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("choice selected while session is {phase}; a question must be awaiting input")]
    InvalidState { phase: SessionPhase },

    #[error("choice index {choice} is out of range for question {question} ({available} choices)")]
    InvalidChoiceIndex {
        question: usize,
        choice: usize,
        available: usize,
    },
}

/// Errors raised while validating a question catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog must contain at least one question")]
    Empty,

    #[error("question {question} has no choices")]
    NoChoices { question: usize },

    #[error("question {question} routes to {target}, which is not past it; the graph must be forward-only")]
    BackwardRoute { question: usize, target: usize },

    #[error("question {question} routes to {target}, but the catalog has {len} questions")]
    RouteOutOfRange {
        question: usize,
        target: usize,
        len: usize,
    },
}
