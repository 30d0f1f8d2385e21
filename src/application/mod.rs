//! Application layer - handlers orchestrating domain operations.
//!
//! Handlers coordinate the flow domain with the renderer, input, and
//! preference ports. They hold no domain logic of their own.

pub mod handlers;

pub use handlers::{QuestionnaireError, RunQuestionnaireHandler, ThemeService};
