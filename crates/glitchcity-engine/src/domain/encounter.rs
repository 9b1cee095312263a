//! Direct-combat resolution.

use super::catalog::Enemy;
use super::outcome::EncounterUpdate;
use super::stats::{PlayerStats, StatsDelta};

/// Glitch relief granted for deleting an enemy.
pub const VICTORY_GLITCH_RELIEF: i32 = 5;

/// Which branch of combat resolution fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterResult {
    Defeated,
    Fled,
    Continues,
}

impl EncounterResult {
    /// Classifies an update. Defeat wins when both flags are set.
    #[must_use]
    pub fn of(update: &EncounterUpdate) -> Self {
        if update.enemy_defeated {
            Self::Defeated
        } else if update.flee_success {
            Self::Fled
        } else {
            Self::Continues
        }
    }
}

/// State of the fight after one combat turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncounterResolution {
    pub result: EncounterResult,
    pub current_enemy: Option<Enemy>,
    pub stats: PlayerStats,
    pub message: Option<String>,
}

impl EncounterResolution {
    /// Whether the encounter ended this turn.
    #[must_use]
    pub fn ended(&self) -> bool {
        self.current_enemy.is_none()
    }
}

/// Applies a combat update against `enemy`. `stats` already carry this turn's
/// clamped deltas.
#[must_use]
pub fn resolve_encounter(
    enemy: &Enemy,
    update: &EncounterUpdate,
    stats: PlayerStats,
) -> EncounterResolution {
    let result = EncounterResult::of(update);
    match result {
        EncounterResult::Defeated => EncounterResolution {
            result,
            current_enemy: None,
            stats: stats.apply(StatsDelta::new(0, 0, -VICTORY_GLITCH_RELIEF)),
            message: Some(format!(
                ":: TARGET_DELETED :: You defeated the {}! Glitch level stabilizing.",
                enemy.name
            )),
        },
        EncounterResult::Fled => EncounterResolution {
            result,
            current_enemy: None,
            stats,
            message: Some(":: ESCAPE_VECTOR_CALCULATED :: You successfully fled.".to_owned()),
        },
        EncounterResult::Continues => EncounterResolution {
            result,
            current_enemy: Some(enemy.clone()),
            stats,
            message: None,
        },
    }
}
