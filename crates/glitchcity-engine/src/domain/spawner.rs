//! Random introduction of new stalkers.

use glitchcity_core::rng::DeterministicRng;

use super::catalog::{ENEMY_COUNT, enemy_at};
use super::pick_index;
use super::stalker::{AiState, StalkingEnemy};

/// Distance at which a freshly detected stalker appears.
pub const SPAWN_DISTANCE: i32 = 4;
/// Glitch level is divided by this to get the spawn chance.
pub const SPAWN_CHANCE_DIVISOR: f64 = 300.0;

/// A stalker introduced this turn and its detection message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spawn {
    pub stalker: StalkingEnemy,
    pub message: String,
}

/// Chance in `[0, 1/3]` that a stalker appears this turn.
#[must_use]
pub fn spawn_chance(glitch_level: i32) -> f64 {
    f64::from(glitch_level) / SPAWN_CHANCE_DIVISOR
}

/// Rolls for a new stalker. Draws one float and, on success, one catalog
/// index.
#[must_use]
pub fn try_spawn(glitch_level: i32, rng: &mut dyn DeterministicRng) -> Option<Spawn> {
    if rng.next_f64() >= spawn_chance(glitch_level) {
        return None;
    }
    let enemy = enemy_at(pick_index(rng, ENEMY_COUNT))?;
    let message = format!(
        ":: UNEXPECTED_PROCESS :: You detect a {} patrolling in the distance.",
        enemy.name
    );
    Some(Spawn {
        stalker: StalkingEnemy {
            enemy,
            distance: SPAWN_DISTANCE,
            ai_state: AiState::Patrolling,
        },
        message,
    })
}
