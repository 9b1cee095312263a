//! Pure domain model and rules.

pub mod ambience;
pub mod catalog;
pub mod commands;
pub mod encounter;
pub mod missions;
pub mod outcome;
pub mod session;
pub mod spawner;
pub mod stalker;
pub mod state;
pub mod stats;
pub mod tutorial;

use glitchcity_core::rng::DeterministicRng;

/// Draws a uniform index into a collection of `len` elements.
///
/// `len` must be non-zero. Out-of-range draws from a scripted source are
/// clamped to the last index.
pub(crate) fn pick_index(rng: &mut dyn DeterministicRng, len: usize) -> usize {
    let max = u32::try_from(len.saturating_sub(1)).unwrap_or(u32::MAX);
    let drawn = usize::try_from(rng.next_u32_range(0, max)).unwrap_or(usize::MAX);
    drawn.min(len.saturating_sub(1))
}
