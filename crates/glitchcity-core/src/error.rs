//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A validation error in domain logic.
    #[error("validation error: {0}")]
    Validation(String),

    /// Player health reached zero; only a reset is accepted.
    #[error("session over: user integrity compromised")]
    SessionOver,

    /// Glitch level is critical; only the recovery transition is accepted.
    #[error("system critical: recovery pending")]
    SystemCritical,

    /// Another transition is still running against the live session.
    #[error("a transition is already in progress")]
    TransitionInProgress,

    /// The narrative service could not produce an outcome.
    #[error("narrative service unavailable: {0}")]
    NarrativeUnavailable(String),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
