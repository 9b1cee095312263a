//! Command handlers for the game session.
//!
//! Each handler takes the current state by reference and returns the state
//! that replaces it. The host owns the single live `GameState` and swaps it
//! only when a handler succeeds.

use std::sync::Mutex;

use glitchcity_core::command::Command;
use glitchcity_core::error::DomainError;
use glitchcity_core::narrative::NarrativeService;
use glitchcity_core::progress::ProgressStore;
use glitchcity_core::rng::DeterministicRng;
use tracing::{debug, info, warn};

use crate::application::transition::{
    apply_connection_lost, apply_outcome, reboot, recover, show_help,
};
use crate::domain::commands::{
    RecoverSystem, ResetSession, SkipTutorial, StartTutorial, SubmitAction,
};
use crate::domain::outcome::OutcomePayload;
use crate::domain::session::SessionStatus;
use crate::domain::state::GameState;
use crate::domain::tutorial::{TutorialOutcome, advance_tutorial, finish_tutorial, start_tutorial};

/// Typed outside the tutorial to restart it.
pub const TUTORIAL_COMMAND: &str = "tutorial";
/// Typed outside combat to list commands.
pub const HELP_COMMAND: &str = "help";

/// Handles the `SubmitAction` command.
///
/// Tutorial input never reaches the narrative service. Otherwise the action
/// is relayed with a snapshot of `state`, the response is validated, and the
/// outcome is applied. A missing or malformed response degrades the turn to
/// the connection-lost transition, which touches neither enemies nor
/// missions. The RNG is locked only around the synchronous transition.
///
/// # Errors
///
/// Returns `DomainError::Validation` for a blank action,
/// `DomainError::SessionOver` or `DomainError::SystemCritical` when the
/// session does not accept actions, and `DomainError::Infrastructure` if the
/// state cannot be serialized or the RNG mutex is poisoned.
pub async fn handle_submit_action(
    command: &SubmitAction,
    state: &GameState,
    narrative: &dyn NarrativeService,
    progress: &dyn ProgressStore,
    rng: &Mutex<dyn DeterministicRng + Send>,
) -> Result<GameState, DomainError> {
    let action = command.action.trim();
    if action.is_empty() {
        return Err(DomainError::Validation("action must not be blank".to_owned()));
    }

    if state.is_tutorial_active {
        return Ok(match advance_tutorial(state, action) {
            TutorialOutcome::Completed(next) => {
                info!(correlation_id = %command.correlation_id(), "tutorial completed");
                persist_tutorial_completion(progress).await;
                next
            }
            other => other.into_state(),
        });
    }

    ensure_accepting_actions(state)?;

    if action.eq_ignore_ascii_case(TUTORIAL_COMMAND) {
        return Ok(start_tutorial(state));
    }
    if action.eq_ignore_ascii_case(HELP_COMMAND) && state.current_enemy.is_none() {
        return Ok(show_help(state, action));
    }

    let outcome = request_outcome(state, action, narrative).await?;

    let mut echoed = state.clone();
    echoed.push_player_action(action);

    let next = match outcome {
        Some(outcome) => {
            let mut rng_guard = rng
                .lock()
                .map_err(|e| DomainError::Infrastructure(format!("RNG mutex poisoned: {e}")))?;
            apply_outcome(&echoed, &outcome, &mut *rng_guard)
        }
        None => apply_connection_lost(&echoed),
    };
    debug!(
        correlation_id = %command.correlation_id(),
        status = ?next.status(),
        "turn applied"
    );
    Ok(next)
}

/// Handles the `ResetSession` command.
#[must_use]
pub fn handle_reset(command: &ResetSession, state: &GameState) -> GameState {
    info!(correlation_id = %command.correlation_id(), "session reset");
    reboot(state)
}

/// Handles the `RecoverSystem` command.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the session is not critical.
pub fn handle_recover(command: &RecoverSystem, state: &GameState) -> Result<GameState, DomainError> {
    let next = recover(state)?;
    info!(
        correlation_id = %command.correlation_id(),
        health = next.stats.health,
        "system recovered"
    );
    Ok(next)
}

/// Handles the `StartTutorial` command. A running tutorial may always be
/// restarted.
///
/// # Errors
///
/// Returns `DomainError::SessionOver` or `DomainError::SystemCritical` when
/// the live session does not accept actions.
pub fn handle_start_tutorial(
    command: &StartTutorial,
    state: &GameState,
) -> Result<GameState, DomainError> {
    if !state.is_tutorial_active {
        ensure_accepting_actions(state)?;
    }
    info!(correlation_id = %command.correlation_id(), "tutorial started");
    Ok(start_tutorial(state))
}

/// Handles the `SkipTutorial` command: ends the tutorial and records that it
/// has been seen.
///
/// # Errors
///
/// Returns `DomainError::Validation` if no tutorial is running.
pub async fn handle_skip_tutorial(
    command: &SkipTutorial,
    state: &GameState,
    progress: &dyn ProgressStore,
) -> Result<GameState, DomainError> {
    if !state.is_tutorial_active {
        return Err(DomainError::Validation("tutorial is not active".to_owned()));
    }
    info!(correlation_id = %command.correlation_id(), step = state.tutorial_step, "tutorial skipped");
    let next = finish_tutorial(state);
    persist_tutorial_completion(progress).await;
    Ok(next)
}

/// Builds the first state of a process. First-time players (or an
/// unreadable progress store) get the tutorial.
pub async fn bootstrap_session(progress: &dyn ProgressStore) -> GameState {
    let completed = progress.tutorial_completed().await.unwrap_or_else(|error| {
        warn!(%error, "failed to read tutorial progress; starting tutorial");
        false
    });
    if completed {
        GameState::initial()
    } else {
        start_tutorial(&GameState::initial())
    }
}

fn ensure_accepting_actions(state: &GameState) -> Result<(), DomainError> {
    match state.status() {
        SessionStatus::Active => Ok(()),
        SessionStatus::Critical => Err(DomainError::SystemCritical),
        SessionStatus::Over => Err(DomainError::SessionOver),
    }
}

/// `Ok(None)` when the service failed or answered with an unusable payload.
async fn request_outcome(
    state: &GameState,
    action: &str,
    narrative: &dyn NarrativeService,
) -> Result<Option<OutcomePayload>, DomainError> {
    let snapshot = serde_json::to_value(state)
        .map_err(|e| DomainError::Infrastructure(format!("state serialization failed: {e}")))?;

    let outcome = match narrative.generate_outcome(&snapshot, action).await {
        Ok(raw) => match OutcomePayload::from_json(&raw) {
            Ok(outcome) => Some(outcome),
            Err(error) => {
                warn!(%error, "narrative payload rejected; using fallback");
                None
            }
        },
        Err(error) => {
            warn!(%error, "narrative service unavailable; using fallback");
            None
        }
    };
    Ok(outcome)
}

async fn persist_tutorial_completion(progress: &dyn ProgressStore) {
    if let Err(error) = progress.mark_tutorial_completed().await {
        warn!(%error, "failed to persist tutorial completion");
    }
}
