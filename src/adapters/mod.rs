//! Adapters - Implementations of the ports.

pub mod storage;
pub mod system;
pub mod terminal;
