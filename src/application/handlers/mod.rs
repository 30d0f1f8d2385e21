//! Application handlers.

mod run_questionnaire;
mod theme;

pub use run_questionnaire::{QuestionnaireError, RunQuestionnaireHandler};
pub use theme::ThemeService;
