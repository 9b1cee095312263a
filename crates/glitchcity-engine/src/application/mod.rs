//! Application layer: the turn orchestrator and the handlers that feed it.

pub mod command_handlers;
pub mod query_handlers;
pub mod transition;
