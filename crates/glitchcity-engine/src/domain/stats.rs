//! Player vitals and the bounded-range clamp.

use serde::{Deserialize, Serialize};

/// Lowest value any stat may take.
pub const STAT_MIN: i32 = 0;
/// Highest value any stat may take.
pub const STAT_MAX: i32 = 100;

/// Clamps a stat into `[STAT_MIN, STAT_MAX]`.
#[must_use]
pub fn clamp_stat(value: i32) -> i32 {
    value.clamp(STAT_MIN, STAT_MAX)
}

/// Additive change to the player's stats, as reported by an outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsDelta {
    pub health: i32,
    pub armor: i32,
    pub glitch_level: i32,
}

impl StatsDelta {
    #[must_use]
    pub const fn new(health: i32, armor: i32, glitch_level: i32) -> Self {
        Self {
            health,
            armor,
            glitch_level,
        }
    }
}

/// The player's vitals. Every field stays within `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub health: i32,
    pub armor: i32,
    pub glitch_level: i32,
}

impl PlayerStats {
    /// Creates stats, clamping each value into range.
    #[must_use]
    pub fn new(health: i32, armor: i32, glitch_level: i32) -> Self {
        Self {
            health: clamp_stat(health),
            armor: clamp_stat(armor),
            glitch_level: clamp_stat(glitch_level),
        }
    }

    /// Applies an additive delta and clamps each stat independently.
    #[must_use]
    pub fn apply(self, delta: StatsDelta) -> Self {
        Self::new(
            self.health.saturating_add(delta.health),
            self.armor.saturating_add(delta.armor),
            self.glitch_level.saturating_add(delta.glitch_level),
        )
    }

    /// Whether the glitch meter has maxed out.
    #[must_use]
    pub fn is_critical(&self) -> bool {
        self.glitch_level >= STAT_MAX
    }

    /// Whether the player has no health left.
    #[must_use]
    pub fn is_depleted(&self) -> bool {
        self.health <= STAT_MIN
    }
}
