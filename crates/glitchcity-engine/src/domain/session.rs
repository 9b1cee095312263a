//! Session-level status and the critical-glitch recovery arithmetic.

use serde::Serialize;

use super::stats::{PlayerStats, clamp_stat};

/// Glitch level restored by the recovery transition.
pub const RECOVERY_GLITCH_LEVEL: i32 = 75;
/// Health lost by the recovery transition.
pub const RECOVERY_HEALTH_PENALTY: i32 = 15;
/// Default cooldown the host waits before offering recovery.
pub const DEFAULT_RECOVERY_COOLDOWN_MS: u32 = 3500;

/// Whether the session accepts actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// Normal play.
    Active,
    /// Glitch maxed out; only recovery is accepted.
    Critical,
    /// Health depleted; only a reset is accepted.
    Over,
}

impl SessionStatus {
    /// Critical takes precedence: a crash is only declared once the system
    /// has recovered and health is still zero.
    #[must_use]
    pub fn of(stats: &PlayerStats) -> Self {
        if stats.is_critical() {
            Self::Critical
        } else if stats.is_depleted() {
            Self::Over
        } else {
            Self::Active
        }
    }
}

/// Stats after the recovery transition.
#[must_use]
pub fn recovered_stats(stats: PlayerStats) -> PlayerStats {
    PlayerStats {
        health: clamp_stat(stats.health.saturating_sub(RECOVERY_HEALTH_PENALTY)),
        armor: stats.armor,
        glitch_level: RECOVERY_GLITCH_LEVEL,
    }
}
