//! UI configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Presentation-facing settings
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Rust log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Whether to emit ANSI color codes
    #[serde(default = "default_color")]
    pub color: bool,

    /// Whether to print question and choice hints
    #[serde(default = "default_show_hints")]
    pub show_hints: bool,
}

impl UiConfig {
    /// Validate UI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.log_level.trim().is_empty() {
            return Err(ValidationError::EmptyLogLevel);
        }
        Ok(())
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            color: default_color(),
            show_hints: default_show_hints(),
        }
    }
}

fn default_log_level() -> String {
    "info,container_compass=debug".to_string()
}

fn default_color() -> bool {
    true
}

fn default_show_hints() -> bool {
    true
}
