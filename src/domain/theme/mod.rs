//! Color scheme value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The visual theme the interface renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    /// Returns the opposite scheme.
    pub fn toggled(&self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    /// The stored string form, `"light"` or `"dark"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error parsing a stored scheme string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color scheme '{0}'; expected 'light' or 'dark'")]
pub struct ParseColorSchemeError(String);

impl FromStr for ColorScheme {
    type Err = ParseColorSchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ColorScheme::Light),
            "dark" => Ok(ColorScheme::Dark),
            other => Err(ParseColorSchemeError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_light() {
        assert_eq!(ColorScheme::default(), ColorScheme::Light);
    }

    #[test]
    fn toggled_flips_both_ways() {
        assert_eq!(ColorScheme::Light.toggled(), ColorScheme::Dark);
        assert_eq!(ColorScheme::Dark.toggled(), ColorScheme::Light);
    }

    #[test]
    fn round_trips_through_string() {
        for scheme in [ColorScheme::Light, ColorScheme::Dark] {
            let parsed: ColorScheme = scheme.as_str().parse().unwrap();
            assert_eq!(parsed, scheme);
        }
    }

    #[test]
    fn unknown_string_is_rejected() {
        let err = "solarized".parse::<ColorScheme>().unwrap_err();
        assert!(err.to_string().contains("solarized"));
    }

    #[test]
    fn serializes_to_lowercase_json() {
        assert_eq!(serde_json::to_string(&ColorScheme::Dark).unwrap(), "\"dark\"");
    }
}
