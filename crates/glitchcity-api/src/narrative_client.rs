//! HTTP relay to the external narrative service.

use std::time::Duration;

use async_trait::async_trait;
use glitchcity_core::error::DomainError;
use glitchcity_core::narrative::NarrativeService;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::AppError;

/// Request body sent to the narrative service.
#[derive(Debug, Serialize)]
struct OutcomeRequest<'a> {
    state: &'a serde_json::Value,
    action: &'a str,
}

/// Narrative service reached over HTTP. The endpoint receives
/// `{"state": ..., "action": "..."}` and answers with an outcome payload,
/// which is returned unvalidated.
#[derive(Debug, Clone)]
pub struct HttpNarrativeService {
    client: Client,
    endpoint: String,
}

impl HttpNarrativeService {
    /// Creates a relay posting to `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Http` if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl NarrativeService for HttpNarrativeService {
    #[instrument(skip(self, state), fields(endpoint = %self.endpoint))]
    async fn generate_outcome(
        &self,
        state: &serde_json::Value,
        player_action: &str,
    ) -> Result<serde_json::Value, DomainError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&OutcomeRequest {
                state,
                action: player_action,
            })
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| DomainError::NarrativeUnavailable(e.to_string()))?;

        let payload = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| DomainError::NarrativeUnavailable(format!("unreadable response: {e}")))?;
        debug!("narrative outcome received");
        Ok(payload)
    }
}

/// Stand-in used when no narrative endpoint is configured. Every turn falls
/// back to the connection-lost outcome.
#[derive(Debug, Clone, Copy)]
pub struct DisconnectedNarrativeService;

#[async_trait]
impl NarrativeService for DisconnectedNarrativeService {
    async fn generate_outcome(
        &self,
        _state: &serde_json::Value,
        _player_action: &str,
    ) -> Result<serde_json::Value, DomainError> {
        Err(DomainError::NarrativeUnavailable(
            "no narrative service configured".to_owned(),
        ))
    }
}
