//! Question-flow domain - catalog, traversal, and resolution.
//!
//! The questionnaire is a forward-only decision DAG. A session walks it
//! from question 0, accumulating answer flags, until a route reaches the
//! terminal sentinel and the recommendation is derived.

mod answer_state;
mod catalog;
mod errors;
mod question;
mod resolution;
mod session;

pub use answer_state::{AnswerState, Flag};
pub use catalog::{Catalog, DEFAULT_CATALOG};
pub use errors::{CatalogError, FlowError};
pub use question::{Choice, Destination, FlagAssignment, Question, Route};
pub use resolution::{ExplanationKey, InnerWrapper, OuterWrapper, Resolution};
pub use session::{SessionPhase, Step, TraversalSession};
