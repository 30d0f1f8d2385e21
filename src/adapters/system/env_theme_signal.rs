//! Environment-based Theme Signal Adapter
//!
//! Terminals expose no portable light/dark media query, so the ambient
//! preference is read from an environment variable, falling back to a
//! configured scheme.

use crate::domain::theme::ColorScheme;
use crate::ports::SystemThemeSignal;

/// Environment variable consulted for the ambient preference.
pub const SYSTEM_THEME_VAR: &str = "CONTAINER_COMPASS_SYSTEM_THEME";

/// System theme signal reading an environment variable.
#[derive(Debug, Clone)]
pub struct EnvThemeSignal {
    fallback: ColorScheme,
}

impl EnvThemeSignal {
    pub fn new(fallback: ColorScheme) -> Self {
        Self { fallback }
    }
}

impl SystemThemeSignal for EnvThemeSignal {
    fn current(&self) -> ColorScheme {
        match std::env::var(SYSTEM_THEME_VAR) {
            Ok(value) => value.parse().unwrap_or_else(|_| {
                tracing::warn!(%value, "unrecognized system theme value, using fallback");
                self.fallback
            }),
            Err(_) => self.fallback,
        }
    }
}
