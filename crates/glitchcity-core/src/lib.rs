//! Glitch City Core: shared domain abstractions.
//!
//! This crate defines the fundamental traits and types that the engine and
//! its hosts depend on. It contains no infrastructure code.

pub mod clock;
pub mod command;
pub mod error;
pub mod narrative;
pub mod progress;
pub mod rng;
