//! Renderer Port - Interface for presenting questions and results.

use thiserror::Error;

use crate::domain::flow::{Question, Resolution};

/// Errors that can occur while rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(String),
}

/// Port for displaying questionnaire output.
///
/// Implementations own the presentation of prompts, hints, and the
/// explanation content attached to a resolution.
pub trait Renderer: Send + Sync {
    /// Displays a question and its choices as selectable actions.
    fn show_question(&self, index: usize, question: &Question) -> Result<(), RenderError>;

    /// Displays the derived type and its explanation blocks.
    fn show_resolution(&self, resolution: &Resolution) -> Result<(), RenderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_error_displays_cause() {
        let err = RenderError::Io("broken pipe".to_string());
        assert!(err.to_string().contains("broken pipe"));
    }
}
