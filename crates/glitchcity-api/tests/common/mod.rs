//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::TimeDelta;
use glitchcity_core::clock::Clock;
use glitchcity_core::rng::DeterministicRng;
use glitchcity_engine::application::command_handlers::bootstrap_session;
use glitchcity_test_support::{
    FixedClock, RecordingProgressStore, ScriptedNarrativeService, SequenceRng,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use glitchcity_api::state::AppState;

/// Fixed timestamp used across all integration tests.
fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(
        chrono::TimeZone::with_ymd_and_hms(&chrono::Utc, 2026, 1, 15, 10, 0, 0).unwrap(),
    ))
}

/// A running app plus handles to its doubles.
pub struct TestApp {
    pub router: Router,
    pub narrative: Arc<ScriptedNarrativeService>,
    pub progress: Arc<RecordingProgressStore>,
}

/// Options for `spawn_app`.
pub struct TestSetup {
    /// Narrative responses, one per relayed turn.
    pub responses: Vec<serde_json::Value>,
    /// Whether the progress store starts with the tutorial completed.
    pub tutorial_completed: bool,
    pub recovery_cooldown: TimeDelta,
    pub rng: SequenceRng,
}

impl Default for TestSetup {
    fn default() -> Self {
        Self {
            responses: Vec::new(),
            tutorial_completed: true,
            recovery_cooldown: TimeDelta::zero(),
            rng: SequenceRng::new(vec![]),
        }
    }
}

/// Builds the full app router with deterministic doubles, bootstrapping the
/// session the same way `main.rs` does.
pub async fn spawn_app(setup: TestSetup) -> TestApp {
    let narrative = Arc::new(ScriptedNarrativeService::new(setup.responses));
    let progress = Arc::new(RecordingProgressStore::new(setup.tutorial_completed));
    let rng: Arc<Mutex<dyn DeterministicRng + Send>> = Arc::new(Mutex::new(setup.rng));
    let initial = bootstrap_session(progress.as_ref()).await;

    let app_state = AppState::new(
        fixed_clock(),
        rng,
        narrative.clone(),
        progress.clone(),
        initial,
        setup.recovery_cooldown,
    );

    TestApp {
        router: glitchcity_api::app(app_state),
        narrative,
        progress,
    }
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: &Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    send(app, request).await
}

/// Send a POST request without a body and return the response.
pub async fn post_empty(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

/// Send a GET request and return the response.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

/// Submit one player action.
pub async fn act(app: &Router, action: &str) -> (StatusCode, serde_json::Value) {
    post_json(app, "/api/v1/game/actions", &serde_json::json!({ "action": action })).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Texts of every log entry in a game view.
pub fn log_texts(view: &serde_json::Value) -> Vec<String> {
    view["state"]["log"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["text"].as_str().unwrap().to_owned())
        .collect()
}
