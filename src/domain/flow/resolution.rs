//! Resolution - deriving the recommended container type.
//!
//! A pure, total function of the answer state a finished traversal
//! accumulated. The tri-state distinction matters here: `sync` answered
//! "no" selects the single-threaded cells, while `sync` never asked
//! yields no inner wrapper at all.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::answer_state::{AnswerState, Flag};

/// The ownership-sharing wrapper, outermost in the recommended type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OuterWrapper {
    Plain,
    Box,
    Rc,
    Arc,
}

impl OuterWrapper {
    /// The wrapper's type name, or None for a plain value.
    pub fn type_name(&self) -> Option<&'static str> {
        match self {
            OuterWrapper::Plain => None,
            OuterWrapper::Box => Some("Box"),
            OuterWrapper::Rc => Some("Rc"),
            OuterWrapper::Arc => Some("Arc"),
        }
    }
}

/// The interior-mutability wrapper, innermost in the recommended type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InnerWrapper {
    Plain,
    Cell,
    RefCell,
    Mutex,
    RwLock,
}

impl InnerWrapper {
    /// The wrapper's type name, or None for a plain value.
    pub fn type_name(&self) -> Option<&'static str> {
        match self {
            InnerWrapper::Plain => None,
            InnerWrapper::Cell => Some("Cell"),
            InnerWrapper::RefCell => Some("RefCell"),
            InnerWrapper::Mutex => Some("Mutex"),
            InnerWrapper::RwLock => Some("RwLock"),
        }
    }
}

/// Key identifying one static explanation block.
///
/// The blocks themselves are presentation content owned by the renderer;
/// the domain only says which blocks apply and in what order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExplanationKey {
    Outer(OuterWrapper),
    Inner(InnerWrapper),
    PlainValue,
}

/// The derived recommendation for a finished traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub outer: OuterWrapper,
    pub inner: InnerWrapper,
}

impl Resolution {
    /// Derives the recommendation from a terminal answer state.
    ///
    /// Total over any answer state: unreachable combinations still
    /// produce a value rather than panicking.
    pub fn resolve(state: &AnswerState) -> Self {
        let outer = if state.get(Flag::Shared).is_true() {
            if state.get(Flag::Sync).is_true() {
                OuterWrapper::Arc
            } else {
                OuterWrapper::Rc
            }
        } else if state.get(Flag::Heap).is_true() {
            OuterWrapper::Box
        } else {
            OuterWrapper::Plain
        };

        let inner = if state.get(Flag::InteriorMut).is_true() {
            if state.get(Flag::Sync).is_true() {
                if state.get(Flag::MainlyRead).is_true() {
                    InnerWrapper::RwLock
                } else {
                    InnerWrapper::Mutex
                }
            } else if state.get(Flag::Sync).is_false() {
                if state.get(Flag::Borrow).is_true() {
                    InnerWrapper::RefCell
                } else {
                    InnerWrapper::Cell
                }
            } else {
                // sync never resolved on this path
                InnerWrapper::Plain
            }
        } else {
            InnerWrapper::Plain
        };

        Self { outer, inner }
    }

    /// Renders the composite type with `T` standing in for the payload,
    /// e.g. `Arc<Mutex<T>>` or plain `T`.
    pub fn type_name(&self) -> String {
        let mut name = String::from("T");
        if let Some(inner) = self.inner.type_name() {
            name = format!("{}<{}>", inner, name);
        }
        if let Some(outer) = self.outer.type_name() {
            name = format!("{}<{}>", outer, name);
        }
        name
    }

    /// The explanation blocks that apply, outer first, then inner.
    ///
    /// A fully plain recommendation gets the single plain-value block.
    pub fn explanation(&self) -> Vec<ExplanationKey> {
        let mut keys = Vec::with_capacity(2);
        if self.outer != OuterWrapper::Plain {
            keys.push(ExplanationKey::Outer(self.outer));
        }
        if self.inner != InnerWrapper::Plain {
            keys.push(ExplanationKey::Inner(self.inner));
        }
        if keys.is_empty() {
            keys.push(ExplanationKey::PlainValue);
        }
        keys
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}
