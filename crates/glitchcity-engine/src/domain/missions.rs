//! Mission rotation and per-turn mission progression.

use glitchcity_core::rng::DeterministicRng;

use super::catalog::{
    MAIN_MISSION_FALLBACK, MAIN_MISSIONS, SECONDARY_MISSION_FALLBACK, SECONDARY_MISSIONS,
};
use super::pick_index;

/// Glitch level is divided by this to get the chance of a new side directive.
pub const SECONDARY_ROTATION_DIVISOR: f64 = 200.0;

/// Picks a uniformly random mission from `pool`, excluding `current`.
///
/// Returns `fallback` when every pool entry equals `current` (or the pool is
/// empty).
#[must_use]
pub fn rotate_mission(
    current: Option<&str>,
    pool: &[&str],
    fallback: &str,
    rng: &mut dyn DeterministicRng,
) -> String {
    let candidates: Vec<&str> = pool
        .iter()
        .copied()
        .filter(|mission| Some(*mission) != current)
        .collect();

    if candidates.is_empty() {
        return fallback.to_owned();
    }
    candidates[pick_index(rng, candidates.len())].to_owned()
}

/// Chance in `[0, 0.5]` that the secondary directive rotates this turn.
#[must_use]
pub fn secondary_rotation_chance(glitch_level: i32) -> f64 {
    f64::from(glitch_level) / SECONDARY_ROTATION_DIVISOR
}

/// Missions after a turn, plus the log lines announcing any change.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionProgress {
    pub mission: String,
    pub secondary_mission: Option<String>,
    pub messages: Vec<String>,
}

/// Advances missions for one out-of-combat turn.
///
/// A completed main mission rotates the main objective and suppresses the
/// secondary roll; otherwise the secondary directive rotates with probability
/// `glitch_level / 200`.
#[must_use]
pub fn progress_missions(
    mission: &str,
    secondary_mission: Option<&str>,
    mission_completed: bool,
    glitch_level: i32,
    rng: &mut dyn DeterministicRng,
) -> MissionProgress {
    if mission_completed {
        let next = rotate_mission(Some(mission), &MAIN_MISSIONS, MAIN_MISSION_FALLBACK, rng);
        let message = format!(":: OBJECTIVE_COMPLETE :: New primary objective received: {next}");
        return MissionProgress {
            mission: next,
            secondary_mission: secondary_mission.map(str::to_owned),
            messages: vec![message],
        };
    }

    if rng.next_f64() < secondary_rotation_chance(glitch_level) {
        let next = rotate_mission(
            secondary_mission,
            &SECONDARY_MISSIONS,
            SECONDARY_MISSION_FALLBACK,
            rng,
        );
        let message =
            format!(":: SIDE_BAND_INTERFERENCE :: New secondary directive acquired: {next}");
        return MissionProgress {
            mission: mission.to_owned(),
            secondary_mission: Some(next),
            messages: vec![message],
        };
    }

    MissionProgress {
        mission: mission.to_owned(),
        secondary_mission: secondary_mission.map(str::to_owned),
        messages: Vec::new(),
    }
}
