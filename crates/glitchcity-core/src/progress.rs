//! Onboarding progress persistence.

use async_trait::async_trait;

use crate::error::DomainError;

/// Durable storage for the single "tutorial previously completed" flag.
#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Reads the flag. A store that has never been written reports `false`.
    async fn tutorial_completed(&self) -> Result<bool, DomainError>;

    /// Records that the tutorial has been completed.
    async fn mark_tutorial_completed(&self) -> Result<(), DomainError>;
}
