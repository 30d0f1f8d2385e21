//! Terminal Renderer Adapter
//!
//! Prints questions and the final recommendation to stdout, with ANSI
//! styling that follows the active color scheme when color is enabled.

use std::io::Write;

use crate::domain::flow::{Question, Resolution};
use crate::domain::theme::ColorScheme;
use crate::ports::{RenderError, Renderer};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Renderer writing styled text to standard output.
pub struct TerminalRenderer {
    scheme: ColorScheme,
    color: bool,
    show_hints: bool,
}

impl TerminalRenderer {
    pub fn new(scheme: ColorScheme, color: bool, show_hints: bool) -> Self {
        Self {
            scheme,
            color,
            show_hints,
        }
    }

    /// Accent color for the active scheme.
    fn accent(&self) -> &'static str {
        match self.scheme {
            ColorScheme::Light => "\x1b[34m", // blue on light backgrounds
            ColorScheme::Dark => "\x1b[36m",  // cyan on dark backgrounds
        }
    }

    fn styled(&self, style: &str, text: &str) -> String {
        if self.color {
            format!("{}{}{}", style, text, RESET)
        } else {
            text.to_string()
        }
    }

    fn write_lines(&self, lines: &[String]) -> Result<(), RenderError> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        for line in lines {
            writeln!(handle, "{}", line).map_err(|e| RenderError::Io(e.to_string()))?;
        }
        Ok(())
    }
}

impl Renderer for TerminalRenderer {
    fn show_question(&self, index: usize, question: &Question) -> Result<(), RenderError> {
        let mut lines = Vec::new();
        lines.push(String::new());
        lines.push(self.styled(BOLD, &question.prompt));

        if self.show_hints {
            if let Some(hint) = &question.hint {
                lines.push(self.styled(DIM, hint));
            }
        }

        for (position, choice) in question.choices.iter().enumerate() {
            let label = format!("  {}) {}", position + 1, choice.label);
            lines.push(self.styled(self.accent(), &label));
            if self.show_hints {
                if let Some(hint) = &choice.hint {
                    lines.push(self.styled(DIM, &format!("     {}", hint)));
                }
            }
        }

        tracing::trace!(question = index, "rendered question");
        self.write_lines(&lines)
    }

    fn show_resolution(&self, resolution: &Resolution) -> Result<(), RenderError> {
        let mut lines = Vec::new();
        lines.push(String::new());
        lines.push("All done! You want:".to_string());
        lines.push(self.styled(
            &format!("{}{}", BOLD, self.accent()),
            &format!("  {}", resolution.type_name()),
        ));
        lines.push(String::new());

        for key in resolution.explanation() {
            lines.push(super::content::explanation_text(key).to_string());
            lines.push(String::new());
        }

        self.write_lines(&lines)
    }
}
