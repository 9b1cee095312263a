//! Shared test mocks and utilities for the Glitch City game engine.

mod clock;
mod narrative;
mod progress;
mod rng;

pub use clock::FixedClock;
pub use narrative::{FailingNarrativeService, ScriptedNarrativeService};
pub use progress::{FailingProgressStore, RecordingProgressStore};
pub use rng::{MockRng, SequenceRng};
