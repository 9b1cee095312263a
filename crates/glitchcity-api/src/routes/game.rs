//! Routes for the live game session.
//!
//! Every mutating route claims the transition gate for its whole run; a
//! second mutation arriving meanwhile is rejected with
//! `transition_in_progress`. The session lock itself is held only to copy
//! the state out and to swap the result in, so reads are never refused.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use glitchcity_core::error::DomainError;
use glitchcity_engine::application::command_handlers;
use glitchcity_engine::application::query_handlers::{GameView, get_game_view};
use glitchcity_engine::domain::commands;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /actions.
#[derive(Debug, Deserialize)]
pub struct SubmitActionRequest {
    /// Free text or a combat button label.
    pub action: String,
}

/// GET /
#[instrument(skip(state))]
async fn get_game(State(state): State<AppState>) -> Json<GameView> {
    let session = state.session.read().await;
    Json(get_game_view(session.game()))
}

/// POST /actions
#[instrument(skip(state, request))]
async fn submit_action(
    State(state): State<AppState>,
    Json(request): Json<SubmitActionRequest>,
) -> Result<Json<GameView>, ApiError> {
    let claim = state.begin_transition()?;
    let current = state.current_game().await;
    let command = commands::SubmitAction {
        correlation_id: Uuid::new_v4(),
        action: request.action,
    };

    info!(correlation_id = %command.correlation_id, "handling submit_action command");

    let next = command_handlers::handle_submit_action(
        &command,
        &current,
        state.narrative.as_ref(),
        state.progress.as_ref(),
        &state.rng,
    )
    .await?;

    Ok(Json(state.commit(&claim, next).await))
}

/// POST /reset
#[instrument(skip(state))]
async fn reset(State(state): State<AppState>) -> Result<Json<GameView>, ApiError> {
    let claim = state.begin_transition()?;
    let current = state.current_game().await;
    let command = commands::ResetSession {
        correlation_id: Uuid::new_v4(),
    };

    info!(correlation_id = %command.correlation_id, "handling reset_session command");

    let next = command_handlers::handle_reset(&command, &current);
    Ok(Json(state.commit(&claim, next).await))
}

/// POST /recover
#[instrument(skip(state))]
async fn recover(State(state): State<AppState>) -> Result<Json<GameView>, ApiError> {
    let claim = state.begin_transition()?;
    let command = commands::RecoverSystem {
        correlation_id: Uuid::new_v4(),
    };

    info!(correlation_id = %command.correlation_id, "handling recover_system command");

    let current = {
        let session = state.session.read().await;
        if !session.recovery_ready(state.clock.now(), state.recovery_cooldown) {
            return Err(DomainError::SystemCritical.into());
        }
        session.game().clone()
    };
    let next = command_handlers::handle_recover(&command, &current)?;
    Ok(Json(state.commit(&claim, next).await))
}

/// POST /tutorial/start
#[instrument(skip(state))]
async fn start_tutorial(State(state): State<AppState>) -> Result<Json<GameView>, ApiError> {
    let claim = state.begin_transition()?;
    let current = state.current_game().await;
    let command = commands::StartTutorial {
        correlation_id: Uuid::new_v4(),
    };

    info!(correlation_id = %command.correlation_id, "handling start_tutorial command");

    let next = command_handlers::handle_start_tutorial(&command, &current)?;
    Ok(Json(state.commit(&claim, next).await))
}

/// POST /tutorial/skip
#[instrument(skip(state))]
async fn skip_tutorial(State(state): State<AppState>) -> Result<Json<GameView>, ApiError> {
    let claim = state.begin_transition()?;
    let current = state.current_game().await;
    let command = commands::SkipTutorial {
        correlation_id: Uuid::new_v4(),
    };

    info!(correlation_id = %command.correlation_id, "handling skip_tutorial command");

    let next = command_handlers::handle_skip_tutorial(&command, &current, state.progress.as_ref())
        .await?;
    Ok(Json(state.commit(&claim, next).await))
}

/// Returns the router for the game session.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_game))
        .route("/actions", post(submit_action))
        .route("/reset", post(reset))
        .route("/recover", post(recover))
        .route("/tutorial/start", post(start_tutorial))
        .route("/tutorial/skip", post(skip_tutorial))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::{Arc, Mutex};

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::{TimeDelta, TimeZone, Utc};
    use glitchcity_core::clock::Clock;
    use glitchcity_core::narrative::NarrativeService;
    use glitchcity_core::rng::DeterministicRng;
    use glitchcity_engine::domain::state::GameState;
    use glitchcity_engine::domain::stats::PlayerStats;
    use glitchcity_test_support::{
        FailingNarrativeService, FixedClock, RecordingProgressStore, ScriptedNarrativeService,
        SequenceRng,
    };
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app_state_with(
        narrative: Arc<dyn NarrativeService>,
        initial: GameState,
        cooldown: TimeDelta,
    ) -> AppState {
        let clock: Arc<dyn Clock> = Arc::new(FixedClock(
            Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
        ));
        let rng: Arc<Mutex<dyn DeterministicRng + Send>> =
            Arc::new(Mutex::new(SequenceRng::new(vec![])));
        AppState::new(
            clock,
            rng,
            narrative,
            Arc::new(RecordingProgressStore::new(true)),
            initial,
            cooldown,
        )
    }

    fn test_app_state() -> AppState {
        app_state_with(
            Arc::new(FailingNarrativeService),
            GameState::initial(),
            TimeDelta::zero(),
        )
    }

    fn state_with_stats(stats: PlayerStats) -> GameState {
        let mut game = GameState::initial();
        game.stats = stats;
        game
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap()
    }

    fn post_empty(uri: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_get_game_returns_view() {
        // Arrange
        let app = router().with_state(test_app_state());
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();

        // Act
        let (status, json) = send(app, request).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "active");
        assert_eq!(json["ambience"], "normal");
        assert_eq!(json["state"]["stats"]["health"], 100);
    }

    #[tokio::test]
    async fn test_submit_action_applies_narrative_outcome() {
        let narrative = ScriptedNarrativeService::new(vec![json!({
            "description": "A drone scans you.",
            "missionCompleted": false,
            "statsChange": { "health": -10, "armor": -5, "glitchLevel": 0 }
        })]);
        let app_state = app_state_with(Arc::new(narrative), GameState::initial(), TimeDelta::zero());
        let app = router().with_state(app_state.clone());

        let (status, json) = send(app, post_json("/actions", &json!({ "action": "wave" }))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["state"]["stats"]["health"], 90);
        assert_eq!(json["state"]["stats"]["armor"], 95);
        assert_eq!(app_state.current_game().await.stats.health, 90);
    }

    #[tokio::test]
    async fn test_submit_action_with_failing_narrative_degrades_gracefully() {
        let app = router().with_state(test_app_state());

        let (status, json) = send(app, post_json("/actions", &json!({ "action": "look" }))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["state"]["stats"]["glitchLevel"], 14);
    }

    #[tokio::test]
    async fn test_blank_action_returns_400() {
        let app = router().with_state(test_app_state());

        let (status, json) = send(app, post_json("/actions", &json!({ "action": "  " }))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "validation_error");
    }

    #[tokio::test]
    async fn test_action_after_crash_returns_409() {
        let app_state = app_state_with(
            Arc::new(FailingNarrativeService),
            state_with_stats(PlayerStats::new(0, 0, 20)),
            TimeDelta::zero(),
        );
        let app = router().with_state(app_state);

        let (status, json) = send(app, post_json("/actions", &json!({ "action": "look" }))).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["error"], "session_over");
    }

    #[tokio::test]
    async fn test_concurrent_transition_returns_409() {
        let app_state = test_app_state();
        let app = router().with_state(app_state.clone());
        let _claim = app_state.begin_transition().unwrap();

        let (status, json) = send(app, post_empty("/reset")).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["error"], "transition_in_progress");
    }

    #[tokio::test]
    async fn test_get_game_is_served_while_transition_in_flight() {
        let app_state = test_app_state();
        let app = router().with_state(app_state.clone());
        let _claim = app_state.begin_transition().unwrap();
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();

        let (status, json) = send(app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "active");
    }

    #[tokio::test]
    async fn test_open_read_does_not_reject_an_action() {
        // Arrange
        let app_state = test_app_state();
        let app = router().with_state(app_state.clone());
        let reader = app_state.session.read().await;

        // Act
        let pending = tokio::spawn(send(app, post_json("/actions", &json!({ "action": "look" }))));
        tokio::task::yield_now().await;
        drop(reader);
        let (status, json) = pending.await.unwrap();

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["state"]["stats"]["glitchLevel"], 14);
    }

    #[tokio::test]
    async fn test_reset_returns_fresh_session() {
        let app_state = app_state_with(
            Arc::new(FailingNarrativeService),
            state_with_stats(PlayerStats::new(0, 0, 20)),
            TimeDelta::zero(),
        );
        let app = router().with_state(app_state);

        let (status, json) = send(app, post_empty("/reset")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "active");
        assert_eq!(json["state"]["log"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_recover_before_cooldown_returns_423() {
        let app_state = app_state_with(
            Arc::new(FailingNarrativeService),
            state_with_stats(PlayerStats::new(50, 50, 100)),
            TimeDelta::milliseconds(3500),
        );
        let app = router().with_state(app_state);

        let (status, json) = send(app, post_empty("/recover")).await;

        assert_eq!(status, StatusCode::LOCKED);
        assert_eq!(json["error"], "system_critical");
    }

    #[tokio::test]
    async fn test_recover_after_cooldown_restores_system() {
        let app_state = app_state_with(
            Arc::new(FailingNarrativeService),
            state_with_stats(PlayerStats::new(50, 50, 100)),
            TimeDelta::zero(),
        );
        let app = router().with_state(app_state);

        let (status, json) = send(app, post_empty("/recover")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["state"]["stats"]["glitchLevel"], 75);
        assert_eq!(json["state"]["stats"]["health"], 35);
    }

    #[tokio::test]
    async fn test_recover_when_not_critical_returns_400() {
        let app = router().with_state(test_app_state());

        let (status, _) = send(app, post_empty("/recover")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_tutorial_start_and_skip() {
        let app_state = test_app_state();

        let (status, json) = send(
            router().with_state(app_state.clone()),
            post_empty("/tutorial/start"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["state"]["isTutorialActive"], true);
        assert_eq!(json["tutorialPlaceholder"], "Type 'continue'...");

        let (status, json) = send(router().with_state(app_state), post_empty("/tutorial/skip")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["state"]["isTutorialActive"], false);
    }

    #[tokio::test]
    async fn test_skip_without_tutorial_returns_400() {
        let app = router().with_state(test_app_state());

        let (status, _) = send(app, post_empty("/tutorial/skip")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
