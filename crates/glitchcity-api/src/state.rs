//! Shared application state.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeDelta, Utc};
use glitchcity_core::clock::Clock;
use glitchcity_core::error::DomainError;
use glitchcity_core::narrative::NarrativeService;
use glitchcity_core::progress::ProgressStore;
use glitchcity_core::rng::DeterministicRng;
use glitchcity_engine::application::query_handlers::{GameView, get_game_view};
use glitchcity_engine::domain::session::SessionStatus;
use glitchcity_engine::domain::state::GameState;
use tokio::sync::{RwLock, Semaphore, SemaphorePermit};

/// The single live session and the moment it last went critical.
#[derive(Debug)]
pub struct LiveSession {
    game: GameState,
    critical_since: Option<DateTime<Utc>>,
}

impl LiveSession {
    /// Wraps `game`, starting the critical timer if it is already critical.
    #[must_use]
    pub fn new(game: GameState, now: DateTime<Utc>) -> Self {
        let critical_since = (game.status() == SessionStatus::Critical).then_some(now);
        Self {
            game,
            critical_since,
        }
    }

    /// The current game state.
    #[must_use]
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Swaps in the state produced by a transition.
    pub fn replace(&mut self, next: GameState, now: DateTime<Utc>) {
        self.critical_since = if next.status() == SessionStatus::Critical {
            self.critical_since.or(Some(now))
        } else {
            None
        };
        self.game = next;
    }

    /// Whether the recovery cooldown has elapsed at `now`. Always true when
    /// the session is not critical, so the recovery transition can report
    /// its own error.
    #[must_use]
    pub fn recovery_ready(&self, now: DateTime<Utc>, cooldown: TimeDelta) -> bool {
        self.critical_since.is_none_or(|since| now >= since + cooldown)
    }
}

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Clock used to time the recovery cooldown.
    pub clock: Arc<dyn Clock>,
    /// RNG handed to the transition engine.
    pub rng: Arc<Mutex<dyn DeterministicRng + Send>>,
    /// Narrative relay.
    pub narrative: Arc<dyn NarrativeService>,
    /// Durable onboarding progress.
    pub progress: Arc<dyn ProgressStore>,
    /// The live session. Locked only to read a snapshot or swap in a result,
    /// never across the narrative call.
    pub session: Arc<RwLock<LiveSession>>,
    /// One permit; whoever holds it is the only writer of `session`.
    transition_gate: Arc<Semaphore>,
    /// Delay between entering the critical state and accepting recovery.
    pub recovery_cooldown: TimeDelta,
}

impl AppState {
    /// Create new application state hosting `initial`.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock>,
        rng: Arc<Mutex<dyn DeterministicRng + Send>>,
        narrative: Arc<dyn NarrativeService>,
        progress: Arc<dyn ProgressStore>,
        initial: GameState,
        recovery_cooldown: TimeDelta,
    ) -> Self {
        let session = LiveSession::new(initial, clock.now());
        Self {
            clock,
            rng,
            narrative,
            progress,
            session: Arc::new(RwLock::new(session)),
            transition_gate: Arc::new(Semaphore::new(1)),
            recovery_cooldown,
        }
    }

    /// Claims the right to write the session. Readers are not affected.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TransitionInProgress` if another transition
    /// holds the claim.
    pub fn begin_transition(&self) -> Result<SemaphorePermit<'_>, DomainError> {
        self.transition_gate
            .try_acquire()
            .map_err(|_| DomainError::TransitionInProgress)
    }

    /// A copy of the live game state.
    pub async fn current_game(&self) -> GameState {
        self.session.read().await.game().clone()
    }

    /// Swaps in `next` under a claim from [`AppState::begin_transition`] and
    /// returns its view.
    pub async fn commit(&self, _claim: &SemaphorePermit<'_>, next: GameState) -> GameView {
        let mut session = self.session.write().await;
        session.replace(next, self.clock.now());
        get_game_view(session.game())
    }
}
