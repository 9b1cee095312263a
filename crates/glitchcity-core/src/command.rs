//! Player and operator requests against the live session.

use uuid::Uuid;

/// A request that may move the session to a new state.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// Dotted name used in handler spans, e.g. `game.submit_action`.
    fn command_type(&self) -> &'static str;

    /// Per-request id carried through handler logs.
    fn correlation_id(&self) -> Uuid;
}
