//! Accumulated answer flags for one traversal session.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::TriState;

/// The fixed set of requirement flags a choice can set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flag {
    /// Ownership is shared across multiple holders.
    Shared,
    /// The contained data must be mutable through a shared handle.
    InteriorMut,
    /// The value lives on the heap.
    Heap,
    /// The container crosses thread boundaries.
    Sync,
    /// Access is by borrowing rather than copying/moving.
    Borrow,
    /// Reads dominate writes.
    MainlyRead,
}

impl Flag {
    /// All flags, in declaration order.
    pub const ALL: [Flag; 6] = [
        Flag::Shared,
        Flag::InteriorMut,
        Flag::Heap,
        Flag::Sync,
        Flag::Borrow,
        Flag::MainlyRead,
    ];
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Flag::Shared => "shared",
            Flag::InteriorMut => "interior_mut",
            Flag::Heap => "heap",
            Flag::Sync => "sync",
            Flag::Borrow => "borrow",
            Flag::MainlyRead => "mainly_read",
        };
        write!(f, "{}", s)
    }
}

/// Answer record accumulated over one traversal session.
///
/// # Invariants
///
/// - Every flag starts `Unset` and is only ever written by applying a
///   choice (or a routing-coupled assignment); never rolled back.
/// - Replaced wholesale when a session restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AnswerState {
    shared: TriState,
    interior_mut: TriState,
    heap: TriState,
    sync: TriState,
    borrow: TriState,
    mainly_read: TriState,
}

impl AnswerState {
    /// Creates an answer state with every flag unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current value of a flag.
    pub fn get(&self, flag: Flag) -> TriState {
        match flag {
            Flag::Shared => self.shared,
            Flag::InteriorMut => self.interior_mut,
            Flag::Heap => self.heap,
            Flag::Sync => self.sync,
            Flag::Borrow => self.borrow,
            Flag::MainlyRead => self.mainly_read,
        }
    }

    /// Sets a flag to an explicit boolean value.
    pub fn set(&mut self, flag: Flag, value: bool) {
        let slot = match flag {
            Flag::Shared => &mut self.shared,
            Flag::InteriorMut => &mut self.interior_mut,
            Flag::Heap => &mut self.heap,
            Flag::Sync => &mut self.sync,
            Flag::Borrow => &mut self.borrow,
            Flag::MainlyRead => &mut self.mainly_read,
        };
        *slot = TriState::from(value);
    }

    /// Returns true if no flag has been set yet.
    pub fn is_empty(&self) -> bool {
        Flag::ALL.iter().all(|&f| self.get(f).is_unset())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_empty() {
        let state = AnswerState::new();
        assert!(state.is_empty());
        for flag in Flag::ALL {
            assert_eq!(state.get(flag), TriState::Unset);
        }
    }

    #[test]
    fn set_writes_only_the_named_flag() {
        let mut state = AnswerState::new();
        state.set(Flag::Shared, true);

        assert_eq!(state.get(Flag::Shared), TriState::True);
        for flag in Flag::ALL.into_iter().filter(|&f| f != Flag::Shared) {
            assert_eq!(state.get(flag), TriState::Unset);
        }
    }

    #[test]
    fn set_false_is_distinct_from_unset() {
        let mut state = AnswerState::new();
        state.set(Flag::Sync, false);

        assert_eq!(state.get(Flag::Sync), TriState::False);
        assert!(!state.is_empty());
    }

    #[test]
    fn set_overwrites_previous_value() {
        let mut state = AnswerState::new();
        state.set(Flag::Borrow, false);
        state.set(Flag::Borrow, true);
        assert_eq!(state.get(Flag::Borrow), TriState::True);
    }

    #[test]
    fn flag_display_uses_snake_case_names() {
        assert_eq!(format!("{}", Flag::InteriorMut), "interior_mut");
        assert_eq!(format!("{}", Flag::MainlyRead), "mainly_read");
    }
}
