//! Theme Store Port - Interface for persisting the color-scheme preference.

use thiserror::Error;

use crate::domain::theme::ColorScheme;

/// Errors that can occur during theme persistence.
#[derive(Debug, Error)]
pub enum ThemeStoreError {
    #[error("failed to serialize preference: {0}")]
    SerializationFailed(String),

    #[error("failed to deserialize preference: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Port for the single persisted preference: the color scheme.
pub trait ThemeStore: Send + Sync {
    /// Loads the stored preference, if one exists.
    fn load(&self) -> Result<Option<ColorScheme>, ThemeStoreError>;

    /// Persists the preference, replacing any previous value.
    fn save(&self, scheme: ColorScheme) -> Result<(), ThemeStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_store_error_io_displays_cause() {
        let err = ThemeStoreError::Io("permission denied".to_string());
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn theme_store_error_deserialization_displays_cause() {
        let err = ThemeStoreError::DeserializationFailed("not json".to_string());
        assert!(err.to_string().contains("deserialize"));
    }
}
