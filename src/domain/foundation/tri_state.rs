//! TriState value object for answer flags.
//!
//! Routing and resolution both need to tell "answered no" apart from
//! "never asked": the single-threaded lock question is skipped entirely on
//! some paths, and resolution yields a different wrapper for `False` than
//! for `Unset`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A boolean answer that may not have been given yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TriState {
    True,
    False,
    #[default]
    Unset,
}

impl TriState {
    /// Returns true only for an explicit `True`.
    ///
    /// `Unset` is treated like `False` here, matching branch conditions
    /// that test whether a flag was affirmatively set.
    pub fn is_true(&self) -> bool {
        matches!(self, TriState::True)
    }

    /// Returns true only for an explicit `False`.
    pub fn is_false(&self) -> bool {
        matches!(self, TriState::False)
    }

    /// Returns true if the flag was never answered.
    pub fn is_unset(&self) -> bool {
        matches!(self, TriState::Unset)
    }
}

impl From<bool> for TriState {
    fn from(value: bool) -> Self {
        if value {
            TriState::True
        } else {
            TriState::False
        }
    }
}

impl fmt::Display for TriState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TriState::True => "true",
            TriState::False => "false",
            TriState::Unset => "unset",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unset() {
        assert_eq!(TriState::default(), TriState::Unset);
    }

    #[test]
    fn unset_is_neither_true_nor_false() {
        assert!(!TriState::Unset.is_true());
        assert!(!TriState::Unset.is_false());
        assert!(TriState::Unset.is_unset());
    }

    #[test]
    fn explicit_values_are_distinguished() {
        assert!(TriState::True.is_true());
        assert!(!TriState::True.is_false());
        assert!(TriState::False.is_false());
        assert!(!TriState::False.is_true());
    }

    #[test]
    fn from_bool_maps_both_values() {
        assert_eq!(TriState::from(true), TriState::True);
        assert_eq!(TriState::from(false), TriState::False);
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(serde_json::to_string(&TriState::Unset).unwrap(), "\"unset\"");
        assert_eq!(serde_json::to_string(&TriState::True).unwrap(), "\"true\"");
    }

    #[test]
    fn display_matches_variant() {
        assert_eq!(format!("{}", TriState::Unset), "unset");
        assert_eq!(format!("{}", TriState::False), "false");
    }
}
