//! RunQuestionnaireHandler - drives one traversal session to completion.

use std::sync::Arc;

use crate::domain::flow::{Catalog, FlowError, Resolution, Step, TraversalSession};
use crate::ports::{ChoiceInput, InputError, RenderError, Renderer};

/// Errors that end a questionnaire run.
#[derive(Debug, thiserror::Error)]
pub enum QuestionnaireError {
    /// Integration bug: the driver stepped the session out of order.
    #[error(transparent)]
    Flow(#[from] FlowError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Input(#[from] InputError),
}

/// Handler that runs the render / select / step loop.
///
/// Strictly synchronous: each selection is applied to completion before
/// the next one is read, so the session is never observed mid-step.
pub struct RunQuestionnaireHandler {
    renderer: Arc<dyn Renderer>,
    input: Arc<dyn ChoiceInput>,
    catalog: Arc<Catalog>,
}

impl RunQuestionnaireHandler {
    pub fn new(
        renderer: Arc<dyn Renderer>,
        input: Arc<dyn ChoiceInput>,
        catalog: Arc<Catalog>,
    ) -> Self {
        Self {
            renderer,
            input,
            catalog,
        }
    }

    /// Runs a fresh session from question 0 to its resolution.
    pub fn handle(&self) -> Result<Resolution, QuestionnaireError> {
        let mut session = TraversalSession::new(Arc::clone(&self.catalog));
        session.start();
        tracing::info!(session_id = %session.id(), "questionnaire started");

        let mut index = 0usize;
        loop {
            let question = session.current_question()?.clone();
            self.renderer.show_question(index, &question)?;

            let choice = self.input.select(index, &question)?;
            tracing::debug!(question = index, choice, "choice selected");

            match session.select_choice(choice)? {
                Step::Question(next) => index = next,
                Step::Resolved(resolution) => {
                    tracing::info!(
                        session_id = %session.id(),
                        recommendation = %resolution,
                        "questionnaire resolved"
                    );
                    self.renderer.show_resolution(&resolution)?;
                    return Ok(resolution);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::flow::{InnerWrapper, OuterWrapper, Question, DEFAULT_CATALOG};
    use std::sync::Mutex;

    /// Renderer that records what it was asked to show.
    #[derive(Default)]
    struct RecordingRenderer {
        questions: Mutex<Vec<usize>>,
        resolutions: Mutex<Vec<Resolution>>,
    }

    impl Renderer for RecordingRenderer {
        fn show_question(&self, index: usize, _question: &Question) -> Result<(), RenderError> {
            self.questions.lock().unwrap().push(index);
            Ok(())
        }

        fn show_resolution(&self, resolution: &Resolution) -> Result<(), RenderError> {
            self.resolutions.lock().unwrap().push(*resolution);
            Ok(())
        }
    }

    /// Input source that replays a fixed selection script.
    struct ScriptedInput {
        selections: Mutex<Vec<usize>>,
    }

    impl ScriptedInput {
        fn new(selections: &[usize]) -> Self {
            let mut reversed: Vec<usize> = selections.to_vec();
            reversed.reverse();
            Self {
                selections: Mutex::new(reversed),
            }
        }
    }

    impl ChoiceInput for ScriptedInput {
        fn select(&self, _question_index: usize, _question: &Question) -> Result<usize, InputError> {
            self.selections.lock().unwrap().pop().ok_or(InputError::Closed)
        }
    }

    fn run(selections: &[usize]) -> (Arc<RecordingRenderer>, Resolution) {
        let renderer = Arc::new(RecordingRenderer::default());
        let handler = RunQuestionnaireHandler::new(
            renderer.clone(),
            Arc::new(ScriptedInput::new(selections)),
            Arc::new(DEFAULT_CATALOG.clone()),
        );
        let resolution = handler.handle().unwrap();
        (renderer, resolution)
    }

    #[test]
    fn owned_immutable_stack_path_renders_three_questions() {
        let (renderer, resolution) = run(&[0, 1, 0]);
        assert_eq!(*renderer.questions.lock().unwrap(), vec![0, 1, 2]);
        assert_eq!(resolution.outer, OuterWrapper::Plain);
        assert_eq!(resolution.inner, InnerWrapper::Plain);
        assert_eq!(*renderer.resolutions.lock().unwrap(), vec![resolution]);
    }

    #[test]
    fn shared_mutable_multi_path_renders_four_questions() {
        let (renderer, resolution) = run(&[1, 0, 1, 0]);
        assert_eq!(*renderer.questions.lock().unwrap(), vec![0, 1, 3, 5]);
        assert_eq!(resolution.outer, OuterWrapper::Arc);
        assert_eq!(resolution.inner, InnerWrapper::RwLock);
    }

    #[test]
    fn exhausted_input_surfaces_as_closed() {
        let handler = RunQuestionnaireHandler::new(
            Arc::new(RecordingRenderer::default()),
            Arc::new(ScriptedInput::new(&[0])),
            Arc::new(DEFAULT_CATALOG.clone()),
        );
        let err = handler.handle().unwrap_err();
        assert!(matches!(err, QuestionnaireError::Input(InputError::Closed)));
    }

    #[test]
    fn consecutive_runs_are_independent() {
        let (_, first) = run(&[1, 0, 1, 1]); // Arc<Mutex<T>>
        let (_, second) = run(&[0, 1, 0]); // plain T
        assert_eq!(first.inner, InnerWrapper::Mutex);
        assert_eq!(second.outer, OuterWrapper::Plain);
        assert_eq!(second.inner, InnerWrapper::Plain);
    }
}
