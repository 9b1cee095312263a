//! Mapping from game state to the soundscape the presentation layer plays.

use serde::Serialize;

use super::session::SessionStatus;
use super::state::GameState;

/// Background audio the presentation layer should be playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AmbienceIntent {
    Silent,
    Normal,
    Combat,
    Critical,
}

/// Picks the ambience for `state`. The tutorial's simulated enemy never
/// triggers combat audio.
#[must_use]
pub fn ambience_for(state: &GameState) -> AmbienceIntent {
    match state.status() {
        SessionStatus::Over => AmbienceIntent::Silent,
        SessionStatus::Critical => AmbienceIntent::Critical,
        SessionStatus::Active if state.current_enemy.is_some() && !state.is_tutorial_active => {
            AmbienceIntent::Combat
        }
        SessionStatus::Active => AmbienceIntent::Normal,
    }
}
