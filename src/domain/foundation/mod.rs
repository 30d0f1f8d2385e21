//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and enums that form the
//! vocabulary of the Container Compass domain.

mod ids;
mod timestamp;
mod tri_state;

pub use ids::SessionId;
pub use timestamp::Timestamp;
pub use tri_state::TriState;
