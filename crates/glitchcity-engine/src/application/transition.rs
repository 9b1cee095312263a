//! The transition orchestrator.
//!
//! Every function here is pure: it takes the previous state by reference,
//! returns a new one, and draws randomness only from the injected source.
//! One turn evaluates, in order:
//!
//! 1. stats clamp of `prev.stats + statsChange`
//! 2. encounter resolution (active enemy and an encounter update)
//! 3. otherwise stalker advance (stalker present, no active enemy)
//! 4. mission progression (no active enemy after 2–3)
//! 5. encounter spawn (no enemy, no stalker before or after, no fight ended)
//!
//! Log lines are appended in that order, after the narrative description.
//! A turn whose narrative call failed runs only step 1, via
//! [`apply_connection_lost`].

use glitchcity_core::error::DomainError;
use glitchcity_core::rng::DeterministicRng;
use tracing::debug;

use crate::domain::encounter::resolve_encounter;
use crate::domain::missions::progress_missions;
use crate::domain::outcome::{CONNECTION_LOST_DESCRIPTION, OutcomePayload};
use crate::domain::session::{SessionStatus, recovered_stats};
use crate::domain::spawner::try_spawn;
use crate::domain::stalker::{StalkerOutcome, advance_stalker};
use crate::domain::state::GameState;

/// Appended when the glitch meter maxes out.
pub const KERNEL_PANIC_MESSAGE: &str =
    ":: KERNEL_PANIC :: System integrity critical! Catastrophic failure imminent!";
/// Appended by the recovery transition.
pub const RECOVERY_MESSAGE: &str =
    ":: RECOVERY_MODE :: System integrity partially restored. User vitals compromised.";
/// Appended when health reaches zero.
pub const FATAL_MESSAGE: &str =
    ":: FATAL_EXCEPTION :: USER_INTEGRITY_COMPROMISED. SYSTEM_CRASHED.";
/// Sole log line after a reset.
pub const REBOOT_MESSAGE: &str = ":: SYSTEM REBOOT INITIATED ::";
/// Response to the `help` command.
pub const HELP_MESSAGE: &str = ":: AVAILABLE COMMANDS ::\n- Use natural language to interact (e.g., 'look around', 'hack the terminal').\n- 'help': Displays this message.\n- 'tutorial': Restarts the tutorial.\n- REBOOT SYSTEM: Resets the game state.";

/// Applies one outcome payload to `prev` and returns the next state.
#[must_use]
pub fn apply_outcome(
    prev: &GameState,
    outcome: &OutcomePayload,
    rng: &mut dyn DeterministicRng,
) -> GameState {
    let mut messages = vec![outcome.description.clone()];
    let mut stats = prev.stats.apply(outcome.stats_change);
    let mut current_enemy = prev.current_enemy.clone();
    let mut stalking_enemy = prev.stalking_enemy.clone();
    let mut encounter_ended = false;

    match (&prev.current_enemy, &prev.stalking_enemy) {
        (Some(enemy), _) => {
            if let Some(update) = &outcome.encounter_update {
                let resolution = resolve_encounter(enemy, update, stats);
                debug!(enemy = %enemy.name, result = ?resolution.result, "encounter resolved");
                encounter_ended = resolution.ended();
                stats = resolution.stats;
                current_enemy = resolution.current_enemy;
                messages.extend(resolution.message);
            }
        }
        (None, Some(stalker)) => {
            let advance = advance_stalker(stalker, outcome.stalker_update.as_ref());
            messages.extend(advance.messages);
            match advance.outcome {
                StalkerOutcome::Engaged(enemy) => {
                    debug!(enemy = %enemy.name, "stalker engaged");
                    current_enemy = Some(enemy);
                    stalking_enemy = None;
                }
                StalkerOutcome::Evaded => {
                    debug!(enemy = %stalker.enemy.name, "stalker evaded");
                    stalking_enemy = None;
                }
                StalkerOutcome::Tracking(next) => {
                    debug!(enemy = %next.enemy.name, distance = next.distance, "stalker tracking");
                    stalking_enemy = Some(next);
                }
            }
        }
        (None, None) => {}
    }

    let mut mission = prev.mission.clone();
    let mut secondary_mission = prev.secondary_mission.clone();
    if current_enemy.is_none() {
        let progress = progress_missions(
            &prev.mission,
            prev.secondary_mission.as_deref(),
            outcome.mission_completed,
            stats.glitch_level,
            rng,
        );
        mission = progress.mission;
        secondary_mission = progress.secondary_mission;
        messages.extend(progress.messages);
    }

    let may_spawn = current_enemy.is_none()
        && prev.stalking_enemy.is_none()
        && stalking_enemy.is_none()
        && !encounter_ended;
    if may_spawn {
        if let Some(spawn) = try_spawn(stats.glitch_level, rng) {
            debug!(enemy = %spawn.stalker.enemy.name, "stalker spawned");
            stalking_enemy = Some(spawn.stalker);
            messages.push(spawn.message);
        }
    }

    let mut next = prev.clone();
    next.stats = stats;
    next.mission = mission;
    next.secondary_mission = secondary_mission;
    next.current_enemy = current_enemy;
    next.stalking_enemy = stalking_enemy;
    for message in messages {
        next.push_system(message);
    }
    announce_status_change(prev.status(), &mut next);
    next
}

/// Applies the connection-lost turn: glitch +1 and the canned description.
///
/// Enemies, the stalker and missions are left exactly as they were and no
/// randomness is drawn.
#[must_use]
pub fn apply_connection_lost(prev: &GameState) -> GameState {
    let fallback = OutcomePayload::connection_lost();
    let mut next = prev.clone();
    next.stats = prev.stats.apply(fallback.stats_change);
    next.push_system(CONNECTION_LOST_DESCRIPTION);
    announce_status_change(prev.status(), &mut next);
    next
}

/// Leaves the critical state: glitch drops to 75 and health pays 15.
///
/// # Errors
///
/// Returns `DomainError::Validation` if `prev` is not critical.
pub fn recover(prev: &GameState) -> Result<GameState, DomainError> {
    if prev.status() != SessionStatus::Critical {
        return Err(DomainError::Validation(
            "recovery is only available while the system is critical".to_owned(),
        ));
    }
    let mut next = prev.clone();
    next.stats = recovered_stats(prev.stats);
    next.push_system(RECOVERY_MESSAGE);
    announce_status_change(SessionStatus::Critical, &mut next);
    Ok(next)
}

/// Replaces the session with a fresh one whose log holds only the reboot
/// notice.
#[must_use]
pub fn reboot(prev: &GameState) -> GameState {
    let mut next = prev.successor();
    next.push_system(REBOOT_MESSAGE);
    next
}

/// Echoes `action` and lists the available commands.
#[must_use]
pub fn show_help(prev: &GameState, action: &str) -> GameState {
    let mut next = prev.clone();
    next.push_player_action(action);
    next.push_system(HELP_MESSAGE);
    next
}

fn announce_status_change(before: SessionStatus, next: &mut GameState) {
    let after = next.status();
    if before == after {
        return;
    }
    match after {
        SessionStatus::Critical => next.push_system(KERNEL_PANIC_MESSAGE),
        SessionStatus::Over => next.push_system(FATAL_MESSAGE),
        SessionStatus::Active => {}
    }
}
