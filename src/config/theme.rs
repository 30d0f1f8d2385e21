//! Theme configuration

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::theme::ColorScheme;

use super::error::ValidationError;

/// Theme persistence and fallback settings
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeConfig {
    /// Where the color-scheme preference is stored
    #[serde(default = "default_preference_file")]
    pub preference_file: PathBuf,

    /// Scheme used when neither a stored preference nor a system signal
    /// is available
    #[serde(default)]
    pub fallback_scheme: ColorScheme,
}

impl ThemeConfig {
    /// Validate theme configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.preference_file.as_os_str().is_empty() {
            return Err(ValidationError::EmptyPreferencePath);
        }
        Ok(())
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            preference_file: default_preference_file(),
            fallback_scheme: ColorScheme::default(),
        }
    }
}

fn default_preference_file() -> PathBuf {
    PathBuf::from(".container-compass/theme.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_light_fallback() {
        let config = ThemeConfig::default();
        assert_eq!(config.fallback_scheme, ColorScheme::Light);
        assert!(config.preference_file.ends_with("theme.json"));
    }

    #[test]
    fn empty_preference_path_fails_validation() {
        let config = ThemeConfig {
            preference_file: PathBuf::new(),
            ..ThemeConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn default_config_validates() {
        assert!(ThemeConfig::default().validate().is_ok());
    }
}
