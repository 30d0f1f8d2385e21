//! Domain layer - the question flow, resolution, and theme vocabulary.

pub mod flow;
pub mod foundation;
pub mod theme;
