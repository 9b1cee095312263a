//! Test narrative services: mock `NarrativeService` implementations.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use glitchcity_core::error::DomainError;
use glitchcity_core::narrative::NarrativeService;

/// A narrative service that replays scripted JSON responses in order and
/// records every player action it was asked about. Fails with
/// `NarrativeUnavailable` once the script is exhausted.
#[derive(Debug, Default)]
pub struct ScriptedNarrativeService {
    responses: Mutex<VecDeque<serde_json::Value>>,
    actions: Mutex<Vec<String>>,
}

impl ScriptedNarrativeService {
    /// Create a service that answers with `responses`, one per call.
    #[must_use]
    pub fn new(responses: Vec<serde_json::Value>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            actions: Mutex::new(Vec::new()),
        }
    }

    /// Returns the player actions received so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn received_actions(&self) -> Vec<String> {
        self.actions.lock().unwrap().clone()
    }
}

#[async_trait]
impl NarrativeService for ScriptedNarrativeService {
    async fn generate_outcome(
        &self,
        _state: &serde_json::Value,
        player_action: &str,
    ) -> Result<serde_json::Value, DomainError> {
        self.actions.lock().unwrap().push(player_action.to_owned());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| DomainError::NarrativeUnavailable("script exhausted".into()))
    }
}

/// A narrative service that always fails. Useful for testing the
/// connection-lost fallback.
#[derive(Debug)]
pub struct FailingNarrativeService;

#[async_trait]
impl NarrativeService for FailingNarrativeService {
    async fn generate_outcome(
        &self,
        _state: &serde_json::Value,
        _player_action: &str,
    ) -> Result<serde_json::Value, DomainError> {
        Err(DomainError::NarrativeUnavailable("connection refused".into()))
    }
}
