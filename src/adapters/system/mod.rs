//! System adapters - ambient theme detection.

mod env_theme_signal;

pub use env_theme_signal::EnvThemeSignal;
