//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `Renderer` - displays questions and the final recommendation
//! - `ChoiceInput` - delivers the user's selection events
//! - `ThemeStore` - persists the single color-scheme preference
//! - `SystemThemeSignal` - reports the ambient light/dark preference

mod choice_input;
mod renderer;
mod theme_signal;
mod theme_store;

pub use choice_input::{ChoiceInput, InputError};
pub use renderer::{RenderError, Renderer};
pub use theme_signal::SystemThemeSignal;
pub use theme_store::{ThemeStore, ThemeStoreError};
