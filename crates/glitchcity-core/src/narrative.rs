//! Narrative service port.
//!
//! The narrative service is the only external collaborator that decides
//! free-form turn outcomes. Its responses cross a trust boundary, so the
//! port deals in raw JSON and leaves validation to the engine.

use async_trait::async_trait;

use crate::error::DomainError;

/// Produces an outcome payload for one player action.
#[async_trait]
pub trait NarrativeService: Send + Sync {
    /// Requests an outcome for `player_action` given a serialized snapshot of
    /// the current game state.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NarrativeUnavailable` if the service cannot be
    /// reached or answers with something other than JSON.
    async fn generate_outcome(
        &self,
        state: &serde_json::Value,
        player_action: &str,
    ) -> Result<serde_json::Value, DomainError>;
}
