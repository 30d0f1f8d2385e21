//! TraversalSession - the question-flow state machine.
//!
//! One session owns one answer state and walks the catalog from question
//! 0 to the terminal sentinel. Steps are atomic: a selection is validated
//! before any flag is written, then the effect and route are applied to
//! completion before the next input is accepted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::domain::foundation::{SessionId, Timestamp};

use super::answer_state::AnswerState;
use super::catalog::Catalog;
use super::errors::FlowError;
use super::question::{Destination, Question};
use super::resolution::Resolution;

/// Where the session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// Created but not started.
    #[default]
    Idle,
    /// Waiting for a choice on the question at this index.
    AwaitingChoice(usize),
    /// Traversal finished; a resolution is available.
    Done,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionPhase::Idle => write!(f, "idle"),
            SessionPhase::AwaitingChoice(index) => write!(f, "awaiting choice on question {}", index),
            SessionPhase::Done => write!(f, "done"),
        }
    }
}

/// Result of one accepted selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Traversal continues at this question index.
    Question(usize),
    /// Traversal finished with this recommendation.
    Resolved(Resolution),
}

/// A single questionnaire run.
///
/// # Invariants
///
/// - Starts at question 0 and only ever moves to a higher index or to
///   `Done` (guaranteed by catalog validation).
/// - The answer state is exclusively owned; restarting replaces it
///   wholesale, so nothing leaks between runs.
#[derive(Debug, Clone)]
pub struct TraversalSession {
    id: SessionId,
    started_at: Timestamp,
    catalog: Arc<Catalog>,
    phase: SessionPhase,
    answers: AnswerState,
    resolution: Option<Resolution>,
}

impl TraversalSession {
    /// Creates an idle session over the given catalog.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            id: SessionId::new(),
            started_at: Timestamp::now(),
            catalog,
            phase: SessionPhase::Idle,
            answers: AnswerState::new(),
            resolution: None,
        }
    }

    /// Starts (or restarts) the traversal at question 0.
    ///
    /// Discards any accumulated answers and any prior resolution.
    pub fn start(&mut self) {
        self.answers = AnswerState::new();
        self.resolution = None;
        self.phase = SessionPhase::AwaitingChoice(0);
        self.started_at = Timestamp::now();
    }

    /// Applies the selected choice for the question currently awaiting
    /// input, then advances.
    ///
    /// # Errors
    ///
    /// - `InvalidState` if the session is not awaiting a choice
    /// - `InvalidChoiceIndex` if the index is out of range
    ///
    /// Both are rejected before any flag is written.
    pub fn select_choice(&mut self, choice_index: usize) -> Result<Step, FlowError> {
        let question_index = match self.phase {
            SessionPhase::AwaitingChoice(index) => index,
            phase => return Err(FlowError::InvalidState { phase }),
        };

        // Awaiting phase implies an in-bounds question
        let question = self
            .catalog
            .question(question_index)
            .expect("awaiting phase always references a validated question");

        let choice = question.choices.get(choice_index).ok_or_else(|| {
            FlowError::InvalidChoiceIndex {
                question: question_index,
                choice: choice_index,
                available: question.choices.len(),
            }
        })?;

        if let Some(effect) = &choice.effect {
            effect.apply(&mut self.answers);
        }

        match choice.route.follow(&mut self.answers) {
            Destination::Question(next) => {
                self.phase = SessionPhase::AwaitingChoice(next);
                Ok(Step::Question(next))
            }
            Destination::Terminal => {
                let resolution = Resolution::resolve(&self.answers);
                self.resolution = Some(resolution);
                self.phase = SessionPhase::Done;
                Ok(Step::Resolved(resolution))
            }
        }
    }

    /// The question currently awaiting a choice.
    ///
    /// # Errors
    ///
    /// - `InvalidState` outside `AwaitingChoice`
    pub fn current_question(&self) -> Result<&Question, FlowError> {
        match self.phase {
            SessionPhase::AwaitingChoice(index) => Ok(self
                .catalog
                .question(index)
                .expect("awaiting phase always references a validated question")),
            phase => Err(FlowError::InvalidState { phase }),
        }
    }

    /// Returns the session ID.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// When the current run started.
    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    /// Returns the current phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// The answers accumulated so far.
    pub fn answers(&self) -> &AnswerState {
        &self.answers
    }

    /// The resolution, once the session is `Done`.
    pub fn resolution(&self) -> Option<&Resolution> {
        self.resolution.as_ref()
    }
}
