//! ThemeService - resolves and persists the color-scheme preference.
//!
//! A stored preference wins; otherwise the ambient system signal
//! decides. Toggling always persists the new value.

use std::sync::Arc;

use crate::domain::theme::ColorScheme;
use crate::ports::{SystemThemeSignal, ThemeStore, ThemeStoreError};

/// Service coordinating the theme store and the system signal.
pub struct ThemeService {
    store: Arc<dyn ThemeStore>,
    signal: Arc<dyn SystemThemeSignal>,
}

impl ThemeService {
    pub fn new(store: Arc<dyn ThemeStore>, signal: Arc<dyn SystemThemeSignal>) -> Self {
        Self { store, signal }
    }

    /// Determines the scheme to start with.
    ///
    /// A stored preference takes priority. An unreadable store is logged
    /// and treated as absent rather than failing startup.
    pub fn init(&self) -> ColorScheme {
        match self.store.load() {
            Ok(Some(scheme)) => {
                tracing::debug!(%scheme, "using stored theme preference");
                scheme
            }
            Ok(None) => {
                let scheme = self.signal.current();
                tracing::debug!(%scheme, "no stored preference, following system theme");
                scheme
            }
            Err(err) => {
                tracing::warn!(error = %err, "theme store unreadable, following system theme");
                self.signal.current()
            }
        }
    }

    /// Flips the scheme and persists the result.
    pub fn toggle(&self, current: ColorScheme) -> Result<ColorScheme, ThemeStoreError> {
        let next = current.toggled();
        self.store.save(next)?;
        tracing::info!(from = %current, to = %next, "theme toggled");
        Ok(next)
    }
}
