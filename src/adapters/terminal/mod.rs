//! Terminal adapters - renderer and input over stdout/stdin.

mod content;
mod input;
mod renderer;

pub use content::explanation_text;
pub use input::StdinChoiceInput;
pub use renderer::TerminalRenderer;
