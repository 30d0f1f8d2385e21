//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the
//! `CONTAINER_COMPASS` prefix and nested keys use `__` as separator.
//!
//! # Example
//!
//! ```no_run
//! use container_compass::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod theme;
mod ui;

pub use error::{ConfigError, ValidationError};
pub use theme::ThemeConfig;
pub use ui::UiConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Presentation settings (color, hints, log filter)
    #[serde(default)]
    pub ui: UiConfig,

    /// Theme persistence settings
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` if present, then reads variables such as
    /// `CONTAINER_COMPASS__UI__COLOR=false` or
    /// `CONTAINER_COMPASS__THEME__PREFERENCE_FILE=/tmp/theme.json`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the
    /// expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CONTAINER_COMPASS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ui.validate()?;
        self.theme.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn defaults_match_section_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.ui.color, UiConfig::default().color);
        assert_eq!(
            config.theme.preference_file,
            ThemeConfig::default().preference_file
        );
    }
}
