//! Container Compass - Interactive container-type recommendation.
//!
//! This crate walks a user through a short questionnaire about their
//! ownership, mutability, threading, and access requirements, then
//! recommends a composite Rust container type such as `Arc<Mutex<T>>`.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
