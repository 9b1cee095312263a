//! Stalking-enemy pursuit state machine.
//!
//! A stalker sits on an abstract distance scale. Each out-of-combat turn it
//! moves by `distance_change`; reaching zero or below engages the player,
//! drifting beyond five loses contact, anything in between keeps tracking.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::catalog::Enemy;
use super::outcome::StalkerUpdate;

/// Distance at or below which the stalker engages.
pub const ENGAGE_DISTANCE: i32 = 0;
/// Distance above which the stalker loses track of the player.
pub const EVADE_DISTANCE: i32 = 5;

/// Behavioral mode of a stalker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiState {
    Patrolling,
    Hunting,
}

impl AiState {
    /// Parses `"patrolling"` / `"hunting"`, ignoring case and surrounding
    /// whitespace.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("patrolling") {
            Some(Self::Patrolling)
        } else if raw.eq_ignore_ascii_case("hunting") {
            Some(Self::Hunting)
        } else {
            None
        }
    }

    /// Distance change applied when the outcome does not specify one.
    #[must_use]
    pub fn default_distance_change(self) -> i32 {
        match self {
            Self::Patrolling => 0,
            Self::Hunting => -1,
        }
    }
}

/// An enemy closing in (or not) on the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StalkingEnemy {
    pub enemy: Enemy,
    pub distance: i32,
    pub ai_state: AiState,
}

/// Qualitative proximity shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProximityBucket {
    DistantSignal,
    ApproachingAnomaly,
    DangerouslyClose,
    ThreatImminent,
    ContactUnknown,
}

impl ProximityBucket {
    #[must_use]
    pub fn from_distance(distance: i32) -> Self {
        match distance {
            d if d >= 4 => Self::DistantSignal,
            3 => Self::ApproachingAnomaly,
            2 => Self::DangerouslyClose,
            1 => Self::ThreatImminent,
            _ => Self::ContactUnknown,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::DistantSignal => "Distant Signal",
            Self::ApproachingAnomaly => "Approaching Anomaly",
            Self::DangerouslyClose => "Dangerously Close",
            Self::ThreatImminent => "Threat Imminent",
            Self::ContactUnknown => "Contact Unknown",
        }
    }
}

impl fmt::Display for ProximityBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where the stalker ends up after a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StalkerOutcome {
    /// The stalker reached the player and becomes the current enemy.
    Engaged(Enemy),
    /// The stalker lost the player and is removed.
    Evaded,
    /// The stalker keeps tracking with updated distance and state.
    Tracking(StalkingEnemy),
}

/// Result of advancing a stalker by one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StalkerAdvance {
    pub outcome: StalkerOutcome,
    /// Log lines in display order.
    pub messages: Vec<String>,
}

/// Advances `stalker` by one turn using the optional narrative update.
#[must_use]
pub fn advance_stalker(stalker: &StalkingEnemy, update: Option<&StalkerUpdate>) -> StalkerAdvance {
    let name = &stalker.enemy.name;
    let distance_change = update
        .and_then(|u| u.distance_change)
        .unwrap_or_else(|| stalker.ai_state.default_distance_change());
    let new_ai_state = update
        .and_then(|u| u.new_ai_state)
        .unwrap_or(stalker.ai_state);
    let narration = update.and_then(|u| u.description.as_deref());

    let mut messages = Vec::new();
    if let Some(narration) = narration {
        messages.push(format!(":: {} :: {narration}", name.to_uppercase()));
    }
    if stalker.ai_state == AiState::Patrolling && new_ai_state == AiState::Hunting {
        messages.push(format!(
            ":: TARGET_ACQUIRED :: The {name} has locked onto your signal!"
        ));
    }

    let new_distance = stalker.distance.saturating_add(distance_change);
    let outcome = if new_distance <= ENGAGE_DISTANCE {
        messages.push(format!(":: CONTACT IMMINENT :: The {name} engages you!"));
        StalkerOutcome::Engaged(stalker.enemy.clone())
    } else if new_distance > EVADE_DISTANCE {
        messages.push(format!(
            ":: THREAT EVADED :: You lost the {name} in the city's static."
        ));
        StalkerOutcome::Evaded
    } else {
        let old_bucket = ProximityBucket::from_distance(stalker.distance);
        let new_bucket = ProximityBucket::from_distance(new_distance);
        if old_bucket != new_bucket && narration.is_none() {
            messages.push(format!(
                ":: PROXIMITY ALERT :: The {name} is now {new_bucket}."
            ));
        }
        StalkerOutcome::Tracking(StalkingEnemy {
            enemy: stalker.enemy.clone(),
            distance: new_distance,
            ai_state: new_ai_state,
        })
    };

    StalkerAdvance { outcome, messages }
}
