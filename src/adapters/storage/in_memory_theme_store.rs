//! In-memory Theme Store Adapter
//!
//! Holds the preference for the lifetime of the process. Used by tests
//! and by runs where persistence is disabled.

use std::sync::Mutex;

use crate::domain::theme::ColorScheme;
use crate::ports::{ThemeStore, ThemeStoreError};

/// Ephemeral theme store.
#[derive(Debug, Default)]
pub struct InMemoryThemeStore {
    value: Mutex<Option<ColorScheme>>,
}

impl InMemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a preference.
    pub fn with_scheme(scheme: ColorScheme) -> Self {
        Self {
            value: Mutex::new(Some(scheme)),
        }
    }
}

impl ThemeStore for InMemoryThemeStore {
    fn load(&self) -> Result<Option<ColorScheme>, ThemeStoreError> {
        Ok(*self
            .value
            .lock()
            .map_err(|e| ThemeStoreError::Io(e.to_string()))?)
    }

    fn save(&self, scheme: ColorScheme) -> Result<(), ThemeStoreError> {
        *self
            .value
            .lock()
            .map_err(|e| ThemeStoreError::Io(e.to_string()))? = Some(scheme);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let store = InMemoryThemeStore::new();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = InMemoryThemeStore::new();
        store.save(ColorScheme::Dark).unwrap();
        assert_eq!(store.load().unwrap(), Some(ColorScheme::Dark));
    }

    #[test]
    fn with_scheme_seeds_the_value() {
        let store = InMemoryThemeStore::with_scheme(ColorScheme::Light);
        assert_eq!(store.load().unwrap(), Some(ColorScheme::Light));
    }
}
