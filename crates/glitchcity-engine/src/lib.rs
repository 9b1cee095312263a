//! Glitch City — game-state transition engine.
//!
//! Responsible for turning a player action and an externally produced
//! outcome payload into the next world state: stat clamping, combat
//! resolution, stalker pursuit, mission rotation, encounter spawning and
//! the scripted tutorial.

pub mod application;
pub mod domain;
